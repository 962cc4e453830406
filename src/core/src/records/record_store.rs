//! Record Store
//!
//! Owns the durable list of drink records. The list lives in a single storage
//! slot as a JSON array, newest record first, and is re-read on every call:
//! the store keeps no cache between operations. Each mutator performs one
//! read-modify-write of the slot.

use log::{debug, info, warn};

use crate::error_handling::types::RecordError;
use crate::records::clock::{format_date, format_time, Clock, SystemClock};
use crate::records::types::DrinkRecord;
use crate::storage::storage_trait::Storage;

/// Slot name used when the configuration does not override it.
pub const DEFAULT_STORAGE_KEY: &str = "drinkRecords";

pub struct RecordStore {
    storage: Box<dyn Storage>,
    clock: Box<dyn Clock>,
    key: String,
}

impl RecordStore {
    /// Store over `storage` using the wall clock and the default slot name.
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self {
            storage,
            clock: Box::new(SystemClock),
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    pub fn with_key<S: Into<String>>(mut self, key: S) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Logs a drink of `volume` ml at the current instant and returns the new record.
    ///
    /// The record goes to the front of the collection. `id` is the creation
    /// millisecond unless a stored record already holds that id or a later one,
    /// in which case it is one past the largest stored id.
    pub fn add(&self, volume: i64) -> Result<DrinkRecord, RecordError> {
        if volume <= 0 {
            return Err(RecordError::InvalidVolume(volume));
        }

        let now = self.clock.now();
        let timestamp = now.timestamp_millis();
        let mut records = self.list_all()?;

        let id = match records.iter().map(|r| r.id).max() {
            Some(max_id) if max_id >= timestamp => max_id
                .checked_add(1)
                .ok_or(RecordError::IdOverflow(max_id))?,
            _ => timestamp,
        };

        let record = DrinkRecord {
            id,
            timestamp,
            date: format_date(&now),
            time: format_time(&now),
            volume: Some(volume),
        };

        records.insert(0, record.clone());
        self.save(&records)?;

        info!(
            "Logged {}ml at {} {} (id {})",
            volume, record.date, record.time, record.id
        );
        Ok(record)
    }

    /// All records, newest first.
    ///
    /// An absent slot and a slot whose content does not parse both read as an
    /// empty collection. Only a failure of the backing storage itself is returned.
    pub fn list_all(&self) -> Result<Vec<DrinkRecord>, RecordError> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<DrinkRecord>>(&raw) {
            Ok(records) => {
                debug!("Loaded {} record(s) from slot {}", records.len(), self.key);
                Ok(records)
            }
            Err(e) => {
                warn!(
                    "Failed to parse records in slot {}, treating as empty: {}",
                    self.key, e
                );
                Ok(Vec::new())
            }
        }
    }

    /// Removes every record with the given id. Unknown ids are a no-op.
    pub fn delete_by_id(&self, id: i64) -> Result<(), RecordError> {
        let mut records = self.list_all()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        self.save(&records)?;

        info!("Deleted {} record(s) with id {}", before - records.len(), id);
        Ok(())
    }

    /// Erases the slot entirely.
    pub fn clear_all(&self) -> Result<(), RecordError> {
        self.storage.remove_item(&self.key)?;
        info!("Cleared all records in slot {}", self.key);
        Ok(())
    }

    fn save(&self, records: &[DrinkRecord]) -> Result<(), RecordError> {
        let raw = serde_json::to_string(records)
            .map_err(|e| RecordError::SerializationFailed(e.to_string()))?;
        self.storage.set_item(&self.key, &raw)?;
        debug!("Saved {} record(s) to slot {}", records.len(), self.key);
        Ok(())
    }
}
