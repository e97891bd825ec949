use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// JSON dataset file to load; empty means the built-in demo dataset.
    #[serde(default)]
    pub data_file: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Status applied to `add-payment` when none is given.
    #[serde(default = "default_payment_status")]
    pub default_payment_status: String,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_payment_status() -> String {
    "partial".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: String::new(),
            currency_symbol: default_currency_symbol(),
            default_payment_status: default_payment_status(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("sitedash")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".sitedash")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("sitedash.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write the current configuration to the config file, creating the
    /// config directory if needed.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("serialize: {}", e)))?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }

    /// Missing-field check used by `config --check`: reports fields that
    /// fall back to defaults in the file on disk.
    pub fn check() -> AppResult<Vec<&'static str>> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(vec!["data_file", "currency_symbol", "default_payment_status"]);
        }

        let content = fs::read_to_string(&path)?;
        let raw: serde_yaml::Value = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        let mut missing = Vec::new();
        for field in ["data_file", "currency_symbol", "default_payment_status"] {
            if raw.get(field).is_none() {
                missing.push(field);
            }
        }
        Ok(missing)
    }
}
