use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::assistant::endpoint::CredentialRef;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub locale: LocaleConfig,
    #[serde(default)]
    pub prefs: PrefsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-pro".to_string()
}

fn default_max_output_tokens() -> u32 {
    500
}

fn default_temperature() -> f64 {
    0.7
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

fn default_max_log_entries() -> usize {
    256
}

fn default_language() -> String {
    "en".to_string()
}

fn default_country() -> String {
    "US".to_string()
}

fn default_prefs_state_path() -> PathBuf {
    PathBuf::from("./state/preferences.json")
}

fn default_logging_dir() -> PathBuf {
    PathBuf::from("./logs/counsel")
}

fn default_logging_filter() -> String {
    "info".to_string()
}

fn default_logging_rotation() -> LoggingRotation {
    LoggingRotation::Daily
}

fn default_logging_retention_days() -> usize {
    14
}

fn default_enabled_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub credential: CredentialRef,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            credential: CredentialRef::default(),
            max_output_tokens: default_max_output_tokens(),
            temperature: default_temperature(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_max_log_entries")]
    pub max_log_entries: usize,
    /// 0 disables threading prior turns into the endpoint call.
    #[serde(default)]
    pub context_window: usize,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_log_entries: default_max_log_entries(),
            context_window: 0,
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    #[serde(default = "default_language")]
    pub default_language: String,
    #[serde(default = "default_country")]
    pub default_country: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            default_country: default_country(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefsConfig {
    #[serde(default = "default_prefs_state_path")]
    pub state_path: PathBuf,
}

impl Default for PrefsConfig {
    fn default() -> Self {
        Self {
            state_path: default_prefs_state_path(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoggingRotation {
    Daily,
    Hourly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_logging_filter")]
    pub filter: String,
    #[serde(default = "default_logging_rotation")]
    pub rotation: LoggingRotation,
    #[serde(default = "default_logging_retention_days")]
    pub retention_days: usize,
    #[serde(default = "default_enabled_true")]
    pub stderr_warn_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_logging_dir(),
            filter: default_logging_filter(),
            rotation: default_logging_rotation(),
            retention_days: default_logging_retention_days(),
            stderr_warn_enabled: true,
        }
    }
}

impl Config {
    /// Loads a JSON5 config file. Relative state and log paths are resolved
    /// against the config file's directory.
    pub fn load(config_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let mut config: Config = json5::from_str(&content)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;

        let config_base = config_path.parent().unwrap_or_else(|| Path::new("."));
        if !config.prefs.state_path.is_absolute() {
            config.prefs.state_path = config_base.join(&config.prefs.state_path);
        }
        if !config.logging.dir.is_absolute() {
            config.logging.dir = config_base.join(&config.logging.dir);
        }

        Ok(config)
    }
}
