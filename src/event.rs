use serde::{Deserialize, Serialize};

/// Routing key for the event bus. One discriminant per [`Event`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    UserPresent,
    UserLeft,
    AppSwitched,
    WakeWordDetected,
    UserCommand,
    JarvisSpeaking,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::UserPresent => "USER_PRESENT",
            EventKind::UserLeft => "USER_LEFT",
            EventKind::AppSwitched => "APP_SWITCHED",
            EventKind::WakeWordDetected => "WAKE_WORD_DETECTED",
            EventKind::UserCommand => "USER_COMMAND",
            EventKind::JarvisSpeaking => "JARVIS_SPEAKING",
        }
    }
}

/// Everything the sensors can tell the engine. Payload shapes are
/// event-specific and deliberately loose; the engine tolerates whatever
/// the upstream trackers manage to fill in.
#[derive(Debug, Clone)]
pub enum Event {
    UserPresent,
    UserLeft,
    AppSwitched { app_name: String, window_title: String, duration: f64 },
    WakeWordDetected { command: String },
    UserCommand { command: String },
    JarvisSpeaking { text: String },
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::UserPresent => EventKind::UserPresent,
            Event::UserLeft => EventKind::UserLeft,
            Event::AppSwitched { .. } => EventKind::AppSwitched,
            Event::WakeWordDetected { .. } => EventKind::WakeWordDetected,
            Event::UserCommand { .. } => EventKind::UserCommand,
            Event::JarvisSpeaking { .. } => EventKind::JarvisSpeaking,
        }
    }

    pub fn command(text: &str) -> Self {
        Event::UserCommand { command: text.to_string() }
    }

    /// The raw utterance, for the two command-bearing variants.
    pub fn utterance(&self) -> Option<&str> {
        match self {
            Event::UserCommand { command } | Event::WakeWordDetected { command } => Some(command),
            _ => None,
        }
    }
}
