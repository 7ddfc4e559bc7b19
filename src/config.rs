use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "mistral".to_string(),
            timeout_secs: 20,
        }
    }
}

/// Driver configuration. Every field has a workable default, so the
/// assistant boots with no config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rules_path: PathBuf,
    pub profile_path: PathBuf,
    pub db_path: PathBuf,
    /// Program spawned per utterance for speech output.
    pub voice_command: String,
    pub search_timeout_secs: u64,
    pub llm: LlmSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules_path: PathBuf::from("config/rules.json"),
            profile_path: PathBuf::from("config/user_memory.json"),
            db_path: PathBuf::from("data/jarvis.db"),
            voice_command: "say".to_string(),
            search_timeout_secs: 10,
            llm: LlmSettings::default(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("malformed config at {}", path.display()))
    }

    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm.timeout_secs)
    }

    pub fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.search_timeout_secs)
    }
}
