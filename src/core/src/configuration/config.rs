use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error_handling::types::ConfigError;
use crate::records::record_store::DEFAULT_STORAGE_KEY;

/// Runtime configuration for the drink log.
///
/// Loaded from an optional TOML file; every field may be omitted and falls
/// back to its default. Command-line flags are applied on top with
/// `with_overrides`.
///
/// # Examples
///
/// ```toml
/// storage_dir = "/home/me/.local/share/droplet"
/// storage_key = "drinkRecords"
/// default_volume = 350
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the records slot.
    ///
    /// When unset, `DROPLET_STORAGE_DIR` is consulted and then the current
    /// working directory.
    pub storage_dir: Option<PathBuf>,

    /// Name of the slot the record collection is stored under.
    pub storage_key: String,

    /// Volume in ml logged by `drink` when no `--volume` is given.
    pub default_volume: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_volume: 250,
        }
    }
}

impl Config {
    /// Reads and validates a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::TomlError(e.to_string()))?;
        config.validate()?;
        debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Applies command-line values over the file values.
    pub fn with_overrides(mut self, storage_dir: Option<PathBuf>) -> Self {
        if storage_dir.is_some() {
            self.storage_dir = storage_dir;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "storage_key must not be empty".to_string(),
            ));
        }
        if self.default_volume <= 0 {
            return Err(ConfigError::InvalidValue(format!(
                "default_volume must be positive, got {}",
                self.default_volume
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("droplet.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_from_file_full() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
storage_dir = "/tmp/droplet"
storage_key = "work"
default_volume = 500
"#,
        );

        let config = Config::from_file(&path).unwrap();
        assert_eq!(
            config,
            Config {
                storage_dir: Some(PathBuf::from("/tmp/droplet")),
                storage_key: "work".to_string(),
                default_volume: 500,
            }
        );
    }

    #[test]
    fn test_from_file_partial_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "default_volume = 330\n");

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.storage_dir, None);
        assert_eq!(config.storage_key, "drinkRecords");
        assert_eq!(config.default_volume, 330);
    }

    #[test]
    fn test_from_file_errors() {
        let dir = TempDir::new().unwrap();

        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::from_file(&missing),
            Err(ConfigError::IoError(_))
        ));

        let unknown = write_config(&dir, "volume = 3\n");
        assert!(matches!(
            Config::from_file(&unknown),
            Err(ConfigError::TomlError(_))
        ));

        let bad = write_config(&dir, "default_volume = 0\n");
        assert!(matches!(
            Config::from_file(&bad),
            Err(ConfigError::InvalidValue(_))
        ));

        let empty_key = write_config(&dir, "storage_key = \"  \"\n");
        assert!(matches!(
            Config::from_file(&empty_key),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let config = Config {
            storage_dir: Some(PathBuf::from("/from/file")),
            ..Default::default()
        };

        let kept = config.clone().with_overrides(None);
        assert_eq!(kept.storage_dir, Some(PathBuf::from("/from/file")));

        let replaced = config.with_overrides(Some(PathBuf::from("/from/cli")));
        assert_eq!(replaced.storage_dir, Some(PathBuf::from("/from/cli")));
    }
}
