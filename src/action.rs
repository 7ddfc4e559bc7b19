use serde::{Deserialize, Serialize};

/// What the caller should do with the produced text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Hand the text to the speech actuator.
    Speak,
    /// Hand the text to the OS automation actuator.
    Execute,
    /// Record the text in the activity store.
    Log,
}

/// The single output contract of the engine and of every capability.
///
/// `terminate` tells the caller to speak a farewell and shut the whole
/// assistant down after dispatching this action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub kind: ActionKind,
    pub text: String,
    #[serde(default)]
    pub terminate: bool,
}

impl Action {
    pub fn speak(text: impl Into<String>) -> Self {
        Self { kind: ActionKind::Speak, text: text.into(), terminate: false }
    }

    pub fn execute(text: impl Into<String>) -> Self {
        Self { kind: ActionKind::Execute, text: text.into(), terminate: false }
    }

    pub fn log(text: impl Into<String>) -> Self {
        Self { kind: ActionKind::Log, text: text.into(), terminate: false }
    }

    pub fn terminating(mut self) -> Self {
        self.terminate = true;
        self
    }

    pub fn is_speech(&self) -> bool {
        self.kind == ActionKind::Speak
    }
}
