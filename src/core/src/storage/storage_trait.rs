//! Storage Trait
//!
//! This module defines the `Storage` trait, the persistent key-value slot the
//! record store reads from and writes back to.
//!
//! Implementors of this trait are responsible for:
//! - Returning the current content of a slot, or `None` when it was never written
//! - Replacing a slot atomically, so a reader never sees a partially written value
//! - Erasing a slot, treating an absent slot as already erased
//!
//! All methods return a `Result` to handle potential storage errors.

use crate::error_handling::types::StorageError;

/// The `Storage` trait defines the interface for key-value persistence backends.
pub trait Storage: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the slot does not exist.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the value stored under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Erases the slot. Removing a missing slot is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
