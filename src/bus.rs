use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::event::{Event, EventKind};

pub type Subscriber = Arc<dyn Fn(&Event) -> anyhow::Result<()> + Send + Sync>;

/// Process-wide synchronous publish/subscribe hub.
///
/// Delivery runs on the publisher's thread, in registration order, against a
/// snapshot of the subscriber list taken before iteration -- subscriptions
/// added during a publish only affect later publishes. A failing subscriber
/// is logged and isolated; it never aborts delivery to the rest and never
/// reaches the publisher. The internal lock protects the subscriber table
/// only, not the called-back logic.
#[derive(Default)]
pub struct EventBus {
    subscribers: Mutex<HashMap<EventKind, Vec<Subscriber>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, kind: EventKind, callback: F)
    where
        F: Fn(&Event) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        let mut table = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
        table.entry(kind).or_default().push(Arc::new(callback));
    }

    pub fn publish(&self, event: &Event) {
        let snapshot: Vec<Subscriber> = {
            let table = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
            table.get(&event.kind()).cloned().unwrap_or_default()
        };

        for callback in snapshot {
            if let Err(err) = callback(event) {
                warn!(event = event.kind().as_str(), %err, "subscriber failed");
            }
        }
    }

    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        let table = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
        table.get(&kind).map_or(0, Vec::len)
    }
}
