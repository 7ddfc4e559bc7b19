use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_USER_NAME: &str = "Sir";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed store file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// User-taught trigger -> canned response mapping. Read-through on every
/// lookup; this process is the sole writer, so there is no cache to
/// invalidate. A trigger maps to exactly one response, last write wins.
pub trait RuleStore: Send + Sync {
    fn put(&self, trigger: &str, response: &str) -> Result<(), StoreError>;

    /// First learned trigger contained in the utterance, if any.
    /// Missing or corrupt storage reads as an empty rule set.
    fn lookup(&self, utterance: &str) -> Option<String>;

    fn all(&self) -> HashMap<String, String>;
}

/// The user's preferred display name.
pub trait ProfileStore: Send + Sync {
    /// Falls back to [`DEFAULT_USER_NAME`] until a name has been taught.
    fn user_name(&self) -> String;

    /// Returns `Ok(false)` without writing when the name fails the
    /// anti-noise heuristic (more than two words is assumed to be a
    /// mis-transcription, not a name).
    fn set_user_name(&self, name: &str) -> Result<bool, StoreError>;
}

pub struct JsonRuleStore {
    path: PathBuf,
}

impl JsonRuleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> HashMap<String, String> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!(path = %self.path.display(), %err, "corrupt rule file, starting empty");
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        }
    }
}

impl RuleStore for JsonRuleStore {
    fn put(&self, trigger: &str, response: &str) -> Result<(), StoreError> {
        let mut rules = self.load();
        rules.insert(trigger.to_lowercase(), response.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&rules)?)?;
        Ok(())
    }

    fn lookup(&self, utterance: &str) -> Option<String> {
        let rules = self.load();
        rules
            .iter()
            .find(|(trigger, _)| utterance.contains(trigger.as_str()))
            .map(|(_, response)| response.clone())
    }

    fn all(&self) -> HashMap<String, String> {
        self.load()
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct ProfileDoc {
    name: Option<String>,
}

pub struct JsonProfileStore {
    path: PathBuf,
}

impl JsonProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProfileStore for JsonProfileStore {
    fn user_name(&self) -> String {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str::<ProfileDoc>(&raw).ok())
            .and_then(|doc| doc.name)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USER_NAME.to_string())
    }

    fn set_user_name(&self, name: &str) -> Result<bool, StoreError> {
        if name.split_whitespace().count() > 2 {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let doc = ProfileDoc { name: Some(name.to_string()) };
        fs::write(&self.path, serde_json::to_string_pretty(&doc)?)?;
        Ok(true)
    }
}
