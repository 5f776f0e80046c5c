use crate::error::{KardexError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "inventory.json";

/// Configuration for kardex, stored as config.json beside the data file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KardexConfig {
    /// Filename of the persisted inventory inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for KardexConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }
}

impl KardexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(KardexError::Io)?;
        let config: KardexConfig =
            serde_json::from_str(&content).map_err(KardexError::MalformedData)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(KardexError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(KardexError::MalformedData)?;
        fs::write(config_path, content).map_err(KardexError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = KardexConfig::default();
        assert_eq!(config.data_file, "inventory.json");
    }

    #[test]
    fn load_missing_config_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let config = KardexConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, KardexConfig::default());
    }

    #[test]
    fn save_and_load() {
        let dir = TempDir::new().unwrap();

        let config = KardexConfig {
            data_file: "stock.json".to_string(),
        };
        config.save(dir.path()).unwrap();

        let loaded = KardexConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.data_file, "stock.json");
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{}").unwrap();

        let loaded = KardexConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.data_file, "inventory.json");
    }
}
