use crate::confirm::types::AppConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config directory not found")]
    ConfigDirNotFound,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .or_else(dirs::data_local_dir)
        .ok_or(ConfigError::ConfigDirNotFound)?;

    let app_config_dir = config_dir.join("recguard");
    Ok(app_config_dir.join("config.jsonc"))
}

pub fn ensure_config_dir() -> Result<PathBuf> {
    let config_path = get_config_path()?;
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(config_path)
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&get_config_path()?)
}

fn load_config_from(config_path: &Path) -> Result<AppConfig> {
    if !config_path.exists() {
        return Ok(AppConfig::new());
    }

    let content = fs::read_to_string(config_path)?;
    let stripped = json_comments::StripComments::new(content.as_bytes());
    let config: AppConfig = serde_json::from_reader(stripped)?;

    Ok(config)
}

/// Saves the configuration to the config file.
/// Note: Comments in the original file will not be preserved.
pub fn save_config(config: &AppConfig) -> Result<()> {
    save_config_to(config, &ensure_config_dir()?)
}

fn save_config_to(config: &AppConfig, config_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(config_path, json)?;
    Ok(())
}
