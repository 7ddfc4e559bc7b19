//! The capability registry. Each skill is an independently testable unit
//! with a yes/no claim test and an execution method producing at most one
//! action. Registration order within a tier encodes priority; the tiers
//! themselves are applied by the decision engine.

pub mod automation;
pub mod brain;
pub mod conversation;
pub mod fun;
pub mod health;
pub mod launcher;
pub mod learning;
pub mod math;
pub mod media;
pub mod productivity;
pub mod protocol;
pub mod system;
pub mod vision_query;
pub mod web_search;

use crate::action::Action;
use crate::actuators::DesktopControl;
use crate::memory::{ActivityLog, ConversationHistory, ShortTermMemory};
use crate::personality::ResponseGenerator;
use crate::state::StateMachine;
use crate::vision::VisionQuery;

/// Priority bucket a skill is registered under. The engine resolves
/// `Direct` before `CatchAll` before `General`; system overrides
/// (shutdown phrases) are checked by the engine itself before any skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Unambiguous imperative commands (launching, media, diagnostics)
    /// that must never be "interpreted" by the reasoner.
    Direct,
    /// The single designated reasoning capability. Also serves as the
    /// global fallback, so the engine never goes silent.
    CatchAll,
    /// Everything else, tried in registration order.
    General,
}

/// Shared execution context handed to every `execute` call. Borrows split
/// out of the engine core, so capability authors get exclusive access to
/// session state for the duration of the (serialized) evaluate call.
pub struct Context<'a> {
    pub user_name: String,
    pub vision: Option<&'a dyn VisionQuery>,
    pub personality: &'a ResponseGenerator,
    pub db: &'a ActivityLog,
    pub memory: &'a mut ShortTermMemory,
    pub history: &'a ConversationHistory,
    pub desktop: &'a dyn DesktopControl,
    pub state: &'a mut StateMachine,
}

pub trait Skill: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Trigger keywords for the default `matches` implementation.
    fn keywords(&self) -> &[&str] {
        &[]
    }

    /// Default claim test: case-insensitive whole-word match on any
    /// keyword, so "art" never claims "start".
    fn matches(&self, command: &str) -> bool {
        self.keywords().iter().any(|kw| contains_word(command, kw))
    }

    /// `None` means "matched but had nothing to do"; resolution moves on.
    fn execute(&self, command: &str, ctx: &mut Context<'_>) -> Option<Action>;
}

/// Whole-word (and whole-phrase) containment: the needle must not extend an
/// adjacent alphanumeric run on either side.
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let hay = haystack.to_lowercase();
    let needle = needle.to_lowercase();

    let mut from = 0;
    while let Some(offset) = hay[from..].find(&needle) {
        let begin = from + offset;
        let end = begin + needle.len();
        let left_ok = hay[..begin].chars().next_back().map_or(true, |c| !c.is_alphanumeric());
        let right_ok = hay[end..].chars().next().map_or(true, |c| !c.is_alphanumeric());
        if left_ok && right_ok {
            return true;
        }
        // stay on a char boundary while scanning past this occurrence
        from = begin + needle.chars().next().map_or(1, char::len_utf8);
    }
    false
}

/// Plain substring containment over a phrase list, for skills whose
/// branching mirrors the spoken phrasing rather than single words.
pub fn contains_any(command: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| command.contains(p))
}
