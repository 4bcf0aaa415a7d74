// Configuration management
use crate::error::{PrefsError, Result};
use crate::models::User;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub user: UserConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserConfig {
    pub login: Option<String>,
    #[serde(default)]
    pub admin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    pub profiles_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll interval in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

fn default_tick_rate() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
        }
    }
}

impl Config {
    /// Get the config directory path
    ///
    /// Priority:
    /// 1. XDG_CONFIG_HOME/ec2prefs (if env var is set)
    /// 2. ~/.config/ec2prefs (if ~/.config exists)
    /// 3. ~/.ec2prefs (fallback on Unix)
    /// 4. Platform default on Windows
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return Ok(PathBuf::from(xdg_config).join("ec2prefs"));
        }

        #[cfg(unix)]
        {
            if let Some(home_dir) = dirs::home_dir() {
                let xdg_config = home_dir.join(".config");
                if xdg_config.exists() {
                    return Ok(xdg_config.join("ec2prefs"));
                }
                return Ok(home_dir.join(".ec2prefs"));
            }
        }

        #[cfg(not(unix))]
        {
            if let Some(config_dir) = dirs::config_dir() {
                return Ok(config_dir.join("ec2prefs"));
            }
        }

        Err(PrefsError::ConfigError(
            "Could not determine config directory".to_string(),
        ))
    }

    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from the default location, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_file_path()?)?;

        if let Ok(path) = std::env::var("EC2PREFS_PROFILES_FILE") {
            tracing::debug!("Using EC2PREFS_PROFILES_FILE from environment: {}", path);
            config.storage.profiles_file = Some(PathBuf::from(path));
        }

        if let Ok(login) = std::env::var("EC2PREFS_USER") {
            tracing::debug!("Using EC2PREFS_USER from environment: {}", login);
            config.user.login = Some(login);
        }

        Ok(config)
    }

    /// Load configuration from a specific file, falling back to defaults if it is missing
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Config::default());
        }

        tracing::debug!("Loading config from: {}", config_path.display());
        let contents = fs::read_to_string(config_path)
            .map_err(|e| PrefsError::ConfigError(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&contents)
            .map_err(|e| PrefsError::ConfigError(format!("Failed to parse config file: {}", e)))
    }

    /// Write a commented sample config file. Never overwrites an existing one.
    pub fn create_sample_at(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(PrefsError::ConfigError(format!(
                "Config file already exists at: {}",
                config_path.display()
            )));
        }

        if let Some(config_dir) = config_path.parent() {
            if !config_dir.exists() {
                fs::create_dir_all(config_dir).map_err(|e| {
                    PrefsError::ConfigError(format!("Failed to create config directory: {}", e))
                })?;
            }
        }

        let sample_config = r#"# ec2prefs configuration
# Location priority:
#   1. $XDG_CONFIG_HOME/ec2prefs/config.toml (if XDG_CONFIG_HOME is set)
#   2. ~/.config/ec2prefs/config.toml (if ~/.config exists)
#   3. ~/.ec2prefs/config.toml (fallback)
#
# Environment overrides:
#   EC2PREFS_PROFILES_FILE
#   EC2PREFS_USER

[user]
# Login shown in the breadcrumb (defaults to $USER)
# login = "alice"
admin = false

[storage]
# Where profiles are stored (defaults to <data dir>/ec2prefs/profiles.json)
# profiles_file = "/home/alice/.local/share/ec2prefs/profiles.json"

[ui]
# Event poll interval in milliseconds
tick_rate_ms = 250
"#;

        fs::write(config_path, sample_config)
            .map_err(|e| PrefsError::ConfigError(format!("Failed to write sample config: {}", e)))?;

        tracing::info!("Created sample config at: {}", config_path.display());
        Ok(())
    }

    /// Resolve where profiles are stored
    pub fn profiles_file(&self) -> Result<PathBuf> {
        if let Some(path) = &self.storage.profiles_file {
            return Ok(path.clone());
        }

        dirs::data_dir()
            .map(|dir| dir.join("ec2prefs").join("profiles.json"))
            .ok_or_else(|| {
                PrefsError::ConfigError("Could not determine data directory".to_string())
            })
    }

    /// The user shown in the breadcrumb
    pub fn user(&self) -> User {
        let login = self
            .user
            .login
            .clone()
            .or_else(|| std::env::var("USER").ok())
            .unwrap_or_else(|| "user".to_string());

        User {
            login,
            admin: self.user.admin,
        }
    }
}
