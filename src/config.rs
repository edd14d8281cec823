use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::questionnaire::{default_questions, Question};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub admin: AdminSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub questionnaire: QuestionnaireSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

/// Persistence backend selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Json,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    #[serde(default = "default_backend")]
    pub backend: StorageBackend,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            data_dir: default_data_dir(),
        }
    }
}

fn default_backend() -> StorageBackend { StorageBackend::Json }
fn default_data_dir() -> String { "data".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct AdminSettings {
    /// Path token the operator scope is mounted under; knowing it grants
    /// full access, so this is obscurity, not authentication
    #[serde(default = "default_path_token")]
    pub path_token: String,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            path_token: default_path_token(),
        }
    }
}

fn default_path_token() -> String { "admin-secret-xyz789".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

/// Questionnaire configuration
///
/// An empty question list falls back to the built-in onboarding set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionnaireSettings {
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl QuestionnaireSettings {
    /// The effective, non-empty question sequence
    pub fn questions(&self) -> Vec<Question> {
        if self.questions.is_empty() {
            default_questions()
        } else {
            self.questions.clone()
        }
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with MATCHBOOK_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with MATCHBOOK__)
            // e.g., MATCHBOOK__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("MATCHBOOK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("MATCHBOOK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_server_settings() {
        let server = ServerSettings::default();
        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.port, 8080);
        assert!(server.workers.is_none());
    }

    #[test]
    fn test_default_storage_settings() {
        let storage = StorageSettings::default();
        assert_eq!(storage.backend, StorageBackend::Json);
        assert_eq!(storage.data_dir, "data");
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_empty_questionnaire_falls_back_to_builtin() {
        let questionnaire = QuestionnaireSettings::default();
        let questions = questionnaire.questions();
        assert_eq!(questions.len(), 5);
    }
}
