use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// The assistant's conversational/operational mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    Idle,
    Greeting,
    Listening,
    FocusMode,
    Chatting,
    Coaching,
    Silent,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::Idle
    }
}

/// Mode tracker with timestamped transitions.
///
/// Self-transitions are no-ops: the timestamp only moves when the target
/// state differs from the current one. Owned by the decision engine; nothing
/// else mutates it.
#[derive(Debug, Clone)]
pub struct StateMachine {
    current: SessionState,
    last_transition: Instant,
}

impl StateMachine {
    pub fn new() -> Self {
        Self { current: SessionState::Idle, last_transition: Instant::now() }
    }

    pub fn current(&self) -> SessionState {
        self.current
    }

    pub fn last_transition(&self) -> Instant {
        self.last_transition
    }

    pub fn since_transition(&self) -> Duration {
        self.last_transition.elapsed()
    }

    pub fn transition(&mut self, next: SessionState) {
        if self.current != next {
            debug!(from = ?self.current, to = ?next, "state transition");
            self.current = next;
            self.last_transition = Instant::now();
        }
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}
