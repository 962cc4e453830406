use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};
use tempfile::NamedTempFile;

use crate::error_handling::types::StorageError;
use crate::storage::storage_trait::Storage;

/// Environment variable overriding the directory used by `FileStorage::new_default`.
pub const STORAGE_DIR_ENV: &str = "DROPLET_STORAGE_DIR";

/// Filesystem-backed slots: each key maps to `<base_path>/<key>.json`.
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Result<Self, StorageError> {
        let base_path = base_path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path).map_err(|e| {
            error!("Failed to create storage dir {}: {}", base_path.display(), e);
            StorageError::WriteFailed(format!("{}: {}", base_path.display(), e))
        })?;
        info!("FileStorage initialized at {}", base_path.display());

        Ok(Self { base_path })
    }

    /// Construct FileStorage using env var DROPLET_STORAGE_DIR if set, otherwise current directory.
    pub fn new_default() -> Result<Self, StorageError> {
        if let Ok(dir) = std::env::var(STORAGE_DIR_ENV) {
            info!("Using FileStorage from {}: {}", STORAGE_DIR_ENV, dir);
            return Self::new(PathBuf::from(dir));
        }
        let cwd = std::env::current_dir().map_err(|e| {
            error!("Failed to get current dir: {}", e);
            StorageError::ReadFailed(e.to_string())
        })?;
        info!("Using FileStorage at current directory: {}", cwd.display());
        Self::new(cwd)
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let bad = key.is_empty()
            || key.contains('/')
            || key.contains('\\')
            || key.contains("..")
            || key.contains('\0');
        if bad {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.base_path.join(format!("{}.json", key)))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key)?;
        match fs::read(&path) {
            Ok(bytes) => {
                debug!("Read {} byte(s) from {}", bytes.len(), path.display());
                match String::from_utf8(bytes) {
                    Ok(content) => Ok(Some(content)),
                    // unreadable content counts as no value, never a rewritten one
                    Err(e) => {
                        warn!("Slot {} at {} is not valid UTF-8: {}", key, path.display(), e);
                        Ok(None)
                    }
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Slot {} not present at {}", key, path.display());
                Ok(None)
            }
            Err(e) => {
                error!("Read failed {}: {}", path.display(), e);
                Err(StorageError::ReadFailed(format!("{}: {}", path.display(), e)))
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        let write_failed = |e: &dyn std::fmt::Display| {
            error!("Write failed {}: {}", path.display(), e);
            StorageError::WriteFailed(format!("{}: {}", path.display(), e))
        };

        // Stage next to the target so the final rename stays on one filesystem
        let mut staged = NamedTempFile::new_in(&self.base_path).map_err(|e| write_failed(&e))?;
        staged
            .write_all(value.as_bytes())
            .and_then(|_| staged.as_file().sync_all())
            .map_err(|e| write_failed(&e))?;
        staged.persist(&path).map_err(|e| write_failed(&e.error))?;

        debug!("Wrote {} byte(s) to {}", value.len(), path.display());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                error!("Remove failed {}: {}", path.display(), e);
                Err(StorageError::WriteFailed(format!("{}: {}", path.display(), e)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_slot_roundtrip() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();

        assert_eq!(storage.get_item("drinkRecords").unwrap(), None);

        storage.set_item("drinkRecords", r#"[{"id":1}]"#).unwrap();
        assert_eq!(
            storage.get_item("drinkRecords").unwrap().as_deref(),
            Some(r#"[{"id":1}]"#)
        );
        assert!(dir.path().join("drinkRecords.json").exists());

        storage.set_item("drinkRecords", "[]").unwrap();
        assert_eq!(storage.get_item("drinkRecords").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_remove_missing_slot_is_noop() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();

        storage.remove_item("drinkRecords").unwrap();
        storage.set_item("drinkRecords", "[]").unwrap();
        storage.remove_item("drinkRecords").unwrap();
        assert_eq!(storage.get_item("drinkRecords").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();

        for key in ["", "../escape", "a/b", "a\\b"] {
            assert!(matches!(
                storage.set_item(key, "[]"),
                Err(StorageError::InvalidKey(_))
            ));
        }
    }

    #[test]
    fn test_no_staging_files_left_behind() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        storage.set_item("drinkRecords", "[]").unwrap();
        storage.set_item("drinkRecords", "[1]").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_invalid_utf8_reads_as_absent() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        let path = dir.path().join("drinkRecords.json");
        fs::write(&path, b"[{\"time\":\"08:00:0\xff\"}]").unwrap();

        assert_eq!(storage.get_item("drinkRecords").unwrap(), None);
        // left on disk untouched
        assert!(fs::read(&path).unwrap().contains(&0xff));
    }

    #[test]
    #[serial]
    fn test_new_default_uses_env_dir() {
        let dir = TempDir::new().unwrap();
        std::env::set_var(STORAGE_DIR_ENV, dir.path());
        let storage = FileStorage::new_default().unwrap();
        std::env::remove_var(STORAGE_DIR_ENV);

        storage.set_item("drinkRecords", "[]").unwrap();
        assert!(dir.path().join("drinkRecords.json").exists());
    }
}
