use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::assessment::history::{FileBackend, HistoryStore, HISTORY_CAPACITY};

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub storage: StorageConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let data_dir = env::var("APP_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        let history_limit = match env::var("APP_HISTORY_LIMIT") {
            Ok(raw) => parse_history_limit(&raw)?,
            Err(_) => HISTORY_CAPACITY,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            storage: StorageConfig {
                data_dir,
                history_limit,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

const DEFAULT_DATA_DIR: &str = ".mindscope";

fn parse_history_limit(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(ConfigError::InvalidHistoryLimit {
            value: raw.to_string(),
        }),
    }
}

/// Where and how much assessment history is kept.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub history_limit: usize,
}

impl StorageConfig {
    pub fn history_store(&self) -> HistoryStore<FileBackend> {
        HistoryStore::new(FileBackend::new(self.data_dir.clone())).with_capacity(self.history_limit)
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidHistoryLimit { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidHistoryLimit { value } => write!(
                f,
                "APP_HISTORY_LIMIT must be a positive integer (got '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_DATA_DIR");
        env::remove_var("APP_HISTORY_LIMIT");
        env::remove_var("APP_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.storage.data_dir, PathBuf::from(".mindscope"));
        assert_eq!(config.storage.history_limit, 10);
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn reads_storage_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "production");
        env::set_var("APP_DATA_DIR", "/tmp/mindscope-data");
        env::set_var("APP_HISTORY_LIMIT", "3");
        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/mindscope-data"));
        assert_eq!(config.storage.history_store().capacity(), 3);
    }

    #[test]
    fn rejects_zero_history_limit() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HISTORY_LIMIT", "0");
        let err = AppConfig::load().expect_err("zero limit rejected");
        reset_env();

        assert!(err.to_string().contains("APP_HISTORY_LIMIT"));
    }
}
