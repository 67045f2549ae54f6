use crate::errors::{AppError, AppResult};
use crate::models::Category;
use crate::models::entry::MidnightPolicy;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod check;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding entries.json, projects.json and owner.json
    pub data_dir: String,
    pub default_project: String,
    pub default_category: Category,
    /// keep | wrap | reject
    pub midnight_policy: MidnightPolicy,
    /// Redraw interval of the live timer, in seconds
    pub tick_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::default_data_dir().to_string_lossy().to_string(),
            default_project: crate::core::DEFAULT_PROJECT.to_string(),
            default_category: Category::Work,
            midnight_policy: MidnightPolicy::Keep,
            tick_seconds: 1,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworklog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rworklog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworklog.conf")
    }

    pub fn default_data_dir() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        tracing::debug!(?cfg, "configuration loaded");
        Ok(cfg)
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Initialize configuration file and data directory.
    ///
    /// In test mode the configuration file is left untouched.
    pub fn init_all(custom_data_dir: Option<String>, is_test: bool) -> AppResult<Self> {
        let mut config = if Self::config_file().exists() {
            Self::load()?
        } else {
            Self::default()
        };

        if let Some(dir) = custom_data_dir {
            config.data_dir = dir;
        }

        if !is_test {
            config.save()?;
        }

        fs::create_dir_all(config.data_path())?;
        Ok(config)
    }
}
