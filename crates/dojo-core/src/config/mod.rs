#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::DojoError;
use crate::language::LanguagePolicy;

/// Top-level bot configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub language: LanguageConfig,
    #[serde(default)]
    pub answers: AnswersConfig,
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
    /// UI string overrides keyed by language code, then message key.
    #[serde(default)]
    pub i18n: HashMap<String, HashMap<String, String>>,
}

/// General bot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Also write a daily-rolling log file under `{data_dir}/logs/`.
    #[serde(default)]
    pub log_to_file: bool,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            log_to_file: false,
        }
    }
}

/// Answer-language resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    #[serde(default)]
    pub policy: LanguagePolicy,
    /// UI locale a new session starts with (e.g. "ja", "en-US").
    #[serde(default = "default_locale")]
    pub default_locale: String,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            policy: LanguagePolicy::default(),
            default_locale: default_locale(),
        }
    }
}

/// How one answer is picked when an entry has several candidates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    /// Always the first candidate (deterministic, default).
    #[default]
    First,
    /// Uniformly random candidate.
    Random,
}

impl SelectionPolicy {
    pub fn display_name(&self) -> &str {
        match self {
            Self::First => "first",
            Self::Random => "random",
        }
    }
}

/// Answer selection config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswersConfig {
    #[serde(default)]
    pub selection: SelectionPolicy,
    /// Seed for `random` selection. Unset = seeded from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Knowledge base source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    /// Path to a `.toml` or `.json` knowledge base. Empty = built-in table.
    #[serde(default)]
    pub path: String,
}

fn default_name() -> String {
    "Dojo Support Bot".to_string()
}
fn default_data_dir() -> String {
    "~/.dojo-bot".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_locale() -> String {
    "ja".to_string()
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, DojoError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| DojoError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| DojoError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
