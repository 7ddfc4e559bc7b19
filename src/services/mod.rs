pub mod llm;
pub mod search;

pub use llm::LlmClient;
pub use search::SearchClient;
