use std::collections::HashMap;
use std::sync::Mutex;

use log::debug;

use crate::error_handling::types::StorageError;
use crate::storage::storage_trait::Storage;

/// Slots kept in process memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.slots
            .lock()
            .map_err(|_| StorageError::ReadFailed("memory storage lock poisoned".into()))
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self.lock()?.get(key).cloned();
        debug!("Read slot {} from memory (present: {})", key, value.is_some());
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        debug!("Wrote {} byte(s) to memory slot {}", value.len(), key);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        debug!("Removed memory slot {}", key);
        Ok(())
    }
}
