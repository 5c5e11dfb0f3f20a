//! Application configuration.
//!
//! Credentials and connection parameters live in an explicit [`Config`]
//! loaded from a TOML file and handed to whoever constructs the facade,
//! not in process-wide constants.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{TasklyError, TasklyResult};

/// Default Mailgun-style API base URL.
const DEFAULT_API_BASE: &str = "https://api.mailgun.net/v3";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Email delivery settings. When absent, no email notifier is registered
    /// and notifications fan out to nothing.
    #[serde(default)]
    pub email: Option<EmailConfig>,
}

/// Database settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

/// Settings for the transactional-email HTTP API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    pub api_key: String,
    pub domain: String,
    pub recipient: String,

    /// Sender address. Defaults to `Taskly <mailgun@{domain}>`.
    #[serde(default)]
    pub sender: Option<String>,

    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("taskly.db")
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> TasklyResult<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|e| TasklyError::config(format!("{}: {}", path.display(), e)))
    }

    /// Load configuration, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> TasklyResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let text = r#"
            [database]
            path = "tasks.db"

            [email]
            api_key = "key-test"
            domain = "sandbox.example.org"
            recipient = "user@example.com"
        "#;

        let config: Config = toml::from_str(text).unwrap();
        assert_eq!(config.database.path, PathBuf::from("tasks.db"));

        let email = config.email.unwrap();
        assert_eq!(email.domain, "sandbox.example.org");
        assert_eq!(email.sender, None);
        assert_eq!(email.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.database.path, PathBuf::from("taskly.db"));
        assert!(config.email.is_none());
    }
}
