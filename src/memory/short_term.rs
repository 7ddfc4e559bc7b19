use std::collections::HashMap;

use serde_json::Value;

/// Session-scoped key/value scratchpad (`last_greeting_time`,
/// `switch_count`, `current_app`, ...). Lives for the process lifetime,
/// never persisted. Missing keys read as zero / empty.
#[derive(Debug, Default)]
pub struct ShortTermMemory {
    data: HashMap<String, Value>,
}

impl ShortTermMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.data.insert(key.to_string(), value.into());
    }

    pub fn get_f64(&self, key: &str) -> f64 {
        self.data.get(key).and_then(Value::as_f64).unwrap_or(0.0)
    }

    pub fn get_i64(&self, key: &str) -> i64 {
        self.data.get(key).and_then(Value::as_i64).unwrap_or(0)
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.data.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn get_text(&self, key: &str) -> String {
        self.data
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }
}
