use std::sync::Arc;

use tracing::warn;

use super::{contains_any, Context, Skill};
use crate::action::Action;
use crate::memory::{ProfileStore, RuleStore};

/// Teaches the assistant: the user's name ("my name is ..."), trigger ->
/// response rules ("X means Y"), and answers from previously learned rules.
pub struct LearningSkill {
    rules: Arc<dyn RuleStore>,
    profile: Arc<dyn ProfileStore>,
}

impl LearningSkill {
    pub fn new(rules: Arc<dyn RuleStore>, profile: Arc<dyn ProfileStore>) -> Self {
        Self { rules, profile }
    }

    fn teach_rule(&self, command: &str) -> Option<Action> {
        let (raw_trigger, response) = command.split_once(" means ")?;
        let trigger = raw_trigger
            .trim_start_matches("learn that")
            .trim_start_matches("remember that")
            .trim_start_matches("learn")
            .trim_start_matches("remember")
            .trim();
        let response = response.trim();
        if trigger.is_empty() || response.is_empty() {
            return None;
        }

        if let Err(err) = self.rules.put(trigger, response) {
            warn!(%err, "failed to persist learned rule");
            return Some(Action::speak(
                "I tried to commit that to memory, Sir, but my storage module is misbehaving.",
            ));
        }
        Some(Action::speak(format!(
            "Acknowledged. I have logged that '{trigger}' corresponds to '{response}'."
        )))
    }

    fn set_name(&self, command: &str) -> Action {
        let raw = command.split("my name is").last().unwrap_or_default();
        let cleaned = raw.trim().trim_end_matches('.');
        let mut chars = cleaned.chars();
        let name = match chars.next() {
            Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
            None => String::new(),
        };
        if name.is_empty() {
            return Action::speak(
                "I didn't quite catch the name, Sir. Could you state it once more?",
            );
        }

        match self.profile.set_user_name(&name) {
            Ok(true) => {
                Action::speak(format!("Very well. I shall address you as {name} from now on."))
            }
            Ok(false) => Action::speak(
                "I'm sorry, that name sounds a bit too complex for my current database.",
            ),
            Err(err) => {
                warn!(%err, "failed to persist user name");
                Action::speak("My profile storage is acting up, Sir. The name did not stick.")
            }
        }
    }
}

impl Skill for LearningSkill {
    fn name(&self) -> &'static str {
        "Learning"
    }

    fn description(&self) -> &'static str {
        "Lets the user teach new rules, recall them, and set their name."
    }

    fn matches(&self, command: &str) -> bool {
        contains_any(command, &["learn", "remember", " means ", "my name is"])
            || self.rules.lookup(command).is_some()
    }

    fn execute(&self, command: &str, _ctx: &mut Context<'_>) -> Option<Action> {
        if command.contains("my name is") {
            return Some(self.set_name(command));
        }

        if command.contains(" means ") {
            if let Some(action) = self.teach_rule(command) {
                return Some(action);
            }
        }

        // Read-through lookup against the learned rule table.
        self.rules.lookup(command).map(Action::speak)
    }
}
