pub mod activity;
pub mod history;
pub mod short_term;
pub mod store;

pub use activity::{ActivityLog, AppUsage};
pub use history::{ConversationHistory, Speaker};
pub use short_term::ShortTermMemory;
pub use store::{JsonProfileStore, JsonRuleStore, ProfileStore, RuleStore, StoreError, DEFAULT_USER_NAME};
