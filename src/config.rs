use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::decoration::DEFAULT_SPARKLE_COUNT;
use crate::error::ConfigError;
use crate::theme::ThemeMode;
use crate::wizard::DEFAULT_HORIZON_DAYS;

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "SereneSteps";

const MAX_HORIZON_DAYS: u64 = 365;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Color scheme for the frontend
    pub theme: ThemeMode,

    /// How many days ahead a session may be booked
    pub booking_horizon_days: u64,

    /// Fixed seed for decorations; random each run when unset
    pub decoration_seed: Option<u64>,

    /// Sparkles drawn per screen change
    pub sparkle_count: usize,

    /// Fallback log filter when RUST_LOG is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            booking_horizon_days: DEFAULT_HORIZON_DAYS,
            decoration_seed: None,
            sparkle_count: DEFAULT_SPARKLE_COUNT,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, writing defaults there if it is missing
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            tracing::info!("Created default config at: {}", path.display());
            return Ok(config);
        }

        let load_failed = |source: Box<dyn std::error::Error + Send + Sync>| ConfigError::LoadFailed {
            path: path.display().to_string(),
            source,
        };
        let content = fs::read_to_string(path).map_err(|e| load_failed(e.into()))?;
        let config: Config = serde_json::from_str(&content).map_err(|e| load_failed(e.into()))?;
        config.validate()?;

        tracing::info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::DirectoryCreationFailed {
                path: parent.display().to_string(),
                source,
            })?;
        }

        let save_failed = |source: Box<dyn std::error::Error + Send + Sync>| ConfigError::SaveFailed {
            path: path.display().to_string(),
            source,
        };
        let json = serde_json::to_string_pretty(self).map_err(|e| save_failed(e.into()))?;
        fs::write(path, json).map_err(|e| save_failed(e.into()))?;

        tracing::debug!("Saved config to: {}", path.display());
        Ok(())
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_HORIZON_DAYS).contains(&self.booking_horizon_days) {
            return Err(ConfigError::Invalid(format!(
                "booking_horizon_days must be 1-{}, got {}",
                MAX_HORIZON_DAYS, self.booking_horizon_days
            )));
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("log_level must not be empty".to_string()));
        }
        Ok(())
    }

    /// Directory holding the config file and logs
    pub fn app_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Self::app_dir()
            .map(|dir| dir.join("config.json"))
            .ok_or(ConfigError::NoConfigDir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, ThemeMode::Calm);
        assert_eq!(config.booking_horizon_days, 60);
        assert_eq!(config.decoration_seed, None);
        assert_eq!(config.sparkle_count, 15);
        assert_eq!(config.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = serde_json::from_str(r#"{ "theme": "sunset" }"#).unwrap();
        assert_eq!(config.theme, ThemeMode::Sunset);
        assert_eq!(config.booking_horizon_days, 60);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            theme: ThemeMode::Forest,
            booking_horizon_days: 30,
            decoration_seed: Some(99),
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_invalid_horizon_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "booking_horizon_days": 0 }"#).unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::LoadFailed { .. })
        ));
    }
}
