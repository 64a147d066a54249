use crate::config::GlobalConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

const CONFIG_FILE_VERSION: &str = "1";

/// The on-disk configuration: refresh rate, company name and rate schedule.
/// Plug records are session state and are never written out; neither is the
/// admin/customer view choice.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PersistedConfig {
    pub version: String,
    pub global_config: GlobalConfig,
}

impl PersistedConfig {
    pub fn new(global_config: GlobalConfig) -> Self {
        Self {
            version: CONFIG_FILE_VERSION.to_string(),
            global_config,
        }
    }
}

impl Default for PersistedConfig {
    fn default() -> Self {
        Self::new(GlobalConfig::default())
    }
}

fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("plugwatch"))
}

fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.json"))
}

/// Missing or unreadable config falls back to defaults; startup never fails
/// on a bad file.
pub fn load() -> PersistedConfig {
    let Some(path) = config_file_path() else {
        return PersistedConfig::default();
    };

    if !path.exists() {
        return PersistedConfig::default();
    }

    fs::read_to_string(&path)
        .ok()
        .and_then(|content| serde_json::from_str::<PersistedConfig>(&content).ok())
        .unwrap_or_default()
}

pub fn save(config: &PersistedConfig) -> io::Result<()> {
    let Some(dir) = config_dir() else {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine config directory",
        ));
    };

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    let Some(path) = config_file_path() else {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine config file path",
        ));
    };

    let content = serde_json::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = PersistedConfig::default();
        assert_eq!(config.version, CONFIG_FILE_VERSION);
        assert_eq!(config.global_config.rates.regular_per_day, 55.0);
    }

    #[test]
    fn config_serialization_roundtrip() {
        let config = PersistedConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: PersistedConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.version, config.version);
        assert_eq!(
            parsed.global_config.rates.discounted_per_day,
            config.global_config.rates.discounted_per_day
        );
    }
}
