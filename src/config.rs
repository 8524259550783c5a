use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "https://www.microburbs.com.au/report_generator/api";

/// Process configuration, read once at startup and passed by reference.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub remote: RemoteConfig,
    pub snapshots: SnapshotConfig,
    pub telemetry: TelemetryConfig,
    /// Skip the remote API and serve only local snapshots.
    pub use_mock_data: bool,
}

/// Settings for the Microburbs API client.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub base_url: String,
    pub token: String,
    pub timeout: Duration,
}

/// Settings for the on-disk snapshot fallback.
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    pub data_dir: PathBuf,
    /// Serve the first suburb in a snapshot when the requested one is absent.
    pub substitute_missing: bool,
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API_TIMEOUT must be a whole number of seconds, got '{0}'")]
    InvalidTimeout(String),

    #[error("{name} must be true or false, got '{value}'")]
    InvalidFlag { name: &'static str, value: String },
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let base_url = env::var("MICROBURBS_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let token = env::var("MICROBURBS_API_TOKEN").unwrap_or_else(|_| "test".to_string());
        let timeout_raw = env::var("API_TIMEOUT").unwrap_or_else(|_| "10".to_string());
        let timeout_secs = timeout_raw
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidTimeout(timeout_raw.clone()))?;

        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());
        let substitute_missing = flag("LOCAL_SUBSTITUTE_MISSING", true)?;
        let use_mock_data = flag("USE_MOCK_DATA", false)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            remote: RemoteConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                token,
                timeout: Duration::from_secs(timeout_secs),
            },
            snapshots: SnapshotConfig {
                data_dir: PathBuf::from(data_dir),
                substitute_missing,
            },
            telemetry: TelemetryConfig { log_level },
            use_mock_data,
        })
    }
}

fn flag(name: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(ConfigError::InvalidFlag { name, value }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "MICROBURBS_API_BASE_URL",
            "MICROBURBS_API_TOKEN",
            "API_TIMEOUT",
            "DATA_DIR",
            "LOCAL_SUBSTITUTE_MISSING",
            "USE_MOCK_DATA",
            "LOG_LEVEL",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.remote.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.remote.token, "test");
        assert_eq!(config.remote.timeout, Duration::from_secs(10));
        assert!(config.snapshots.substitute_missing);
        assert!(!config.use_mock_data);
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn test_rejects_bad_timeout() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("API_TIMEOUT", "soon");
        assert!(matches!(AppConfig::load(), Err(ConfigError::InvalidTimeout(_))));
        reset_env();
    }

    #[test]
    fn test_strict_snapshot_mode() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("LOCAL_SUBSTITUTE_MISSING", "false");
        env::set_var("MICROBURBS_API_BASE_URL", "http://localhost:9000/api/");
        let config = AppConfig::load().expect("config loads");
        assert!(!config.snapshots.substitute_missing);
        assert_eq!(config.remote.base_url, "http://localhost:9000/api");
        reset_env();
    }
}
