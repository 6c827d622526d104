//! Application configuration loaded from TOML.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Local user profile.
///
/// The passport is per-user; the id scopes every stored visit. When the
/// user signs in through a provider the id is replaced with the account's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Signed-in account email, if any
    pub email: Option<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: "Explorer".to_string(),
            email: None,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Override for the visits database location
    pub database_path: Option<PathBuf>,
    /// Local user profile
    pub profile: UserProfile,
    /// Program settings
    pub program: ProgramSettings,
    /// Save worker settings
    pub saving: SavingSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            database_path: None,
            profile: UserProfile::default(),
            program: ProgramSettings::default(),
            saving: SavingSettings::default(),
        }
    }
}

impl AppConfig {
    /// Resolved path of the visits database.
    pub fn database_path(&self) -> PathBuf {
        self.database_path
            .clone()
            .unwrap_or_else(|| self.data_dir.join("visits.db"))
    }
}

/// Passport program settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramSettings {
    /// Last day of the passport program, if the season is bounded
    pub deadline: Option<NaiveDate>,
}

impl Default for ProgramSettings {
    fn default() -> Self {
        Self { deadline: None }
    }
}

/// Background save settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingSettings {
    /// Attempts per visit before giving up
    pub max_attempts: u32,
    /// Delay before the first retry, in milliseconds
    pub base_delay_ms: u64,
}

impl Default for SavingSettings {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay_ms: 500,
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("gov", "franklin", "ParkPass")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from file.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = get_config_path();

    if !path.exists() {
        let config = AppConfig {
            data_dir: get_data_dir(),
            ..Default::default()
        };
        return Ok(config);
    }

    let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = get_data_dir();

    Ok(config)
}

/// Save application configuration to file.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    let path = get_config_path();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trips_through_toml() {
        let mut config = AppConfig::default();
        config.program.deadline = NaiveDate::from_ymd_opt(2025, 10, 31);
        config.profile.name = "Kayla".to_string();

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();

        assert_eq!(parsed.profile.name, "Kayla");
        assert_eq!(parsed.program.deadline, config.program.deadline);
        assert_eq!(parsed.saving.max_attempts, 5);
    }

    #[test]
    fn test_database_path_defaults_under_data_dir() {
        let mut config = AppConfig::default();
        config.data_dir = PathBuf::from("/tmp/parkpass");

        assert_eq!(
            config.database_path(),
            PathBuf::from("/tmp/parkpass/visits.db")
        );

        config.database_path = Some(PathBuf::from("/elsewhere/visits.db"));
        assert_eq!(
            config.database_path(),
            PathBuf::from("/elsewhere/visits.db")
        );
    }
}
