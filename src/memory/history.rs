use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Speaker {
    User,
    Jarvis,
}

impl Speaker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Speaker::User => "USER",
            Speaker::Jarvis => "JARVIS",
        }
    }
}

/// Bounded record of surfaced conversation turns, oldest evicted first.
/// Context for the capabilities, nothing more.
#[derive(Debug, Clone)]
pub struct ConversationHistory {
    entries: VecDeque<(Speaker, String)>,
    capacity: usize,
}

impl ConversationHistory {
    pub fn new(capacity: usize) -> Self {
        Self { entries: VecDeque::with_capacity(capacity), capacity }
    }

    pub fn add(&mut self, speaker: Speaker, message: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back((speaker, message.into()));
    }

    pub fn recent(&self, n: usize) -> impl Iterator<Item = &(Speaker, String)> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip)
    }

    pub fn last_user_message(&self) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(speaker, _)| *speaker == Speaker::User)
            .map(|(_, message)| message.as_str())
    }

    pub fn context_string(&self) -> String {
        self.entries
            .iter()
            .map(|(speaker, message)| format!("{}: {}", speaker.as_str(), message))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn entries(&self) -> impl Iterator<Item = &(Speaker, String)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
