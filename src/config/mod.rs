use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    core::allocation::UnitTable,
    errors::{RentalError, Result},
    store::seed,
    utils::paths::{self, ensure_dir},
};

const TMP_SUFFIX: &str = "tmp";

/// User-adjustable settings: currency display, data location and the shared
/// unit table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Overrides where store values are written. Defaults to `<base>/data`.
    pub data_dir: Option<PathBuf>,
    #[serde(default = "seed::standard_units")]
    pub units: UnitTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            data_dir: None,
            units: seed::standard_units(),
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "₱".into()
    }

    pub fn resolve_data_dir(&self, base: &Path) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| paths::data_dir_in(base))
    }
}

/// Loads and saves [`Config`] as JSON under the application directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        let path = paths::config_file_in(&base);
        Ok(Self { base, path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| {
            RentalError::Config(format!("{}: {}", self.path.display(), err))
        })
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.tmp_path();
        let written = write_then_rename(&tmp, &self.path, json.as_bytes());
        if written.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        Ok(written?)
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension(format!("json.{}", TMP_SUFFIX))
    }
}

fn write_then_rename(tmp: &Path, target: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(tmp)?;
    file.write_all(bytes)?;
    file.flush()?;
    drop(file);
    fs::rename(tmp, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::allocation::{AllocationRule, SharedUnit};
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.units.units().len(), 2);
    }

    #[test]
    fn saved_units_are_loaded_back() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = Config {
            currency_symbol: "$".into(),
            data_dir: None,
            units: UnitTable::new(vec![SharedUnit::new(
                "Loft",
                AllocationRule::PoolSplit { pool: 900.0 },
            )]),
        };
        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::create_dir_all(manager.path().parent().unwrap()).unwrap();
        fs::write(manager.path(), r#"{"currency_symbol":"€"}"#).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.units, seed::standard_units());
    }

    #[test]
    fn failed_save_cleans_up_temp_file() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::create_dir_all(manager.path().join("occupied")).unwrap();

        assert!(manager.save(&Config::default()).is_err());
        assert!(!manager.tmp_path().exists());
    }

    #[test]
    fn corrupt_file_is_a_config_error() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::create_dir_all(manager.path().parent().unwrap()).unwrap();
        fs::write(manager.path(), "{").unwrap();
        assert!(matches!(manager.load(), Err(RentalError::Config(_))));
    }
}
