//! Storage subsystem
//!
//! Key-value persistence slots backing the record store. Each slot holds one
//! serialized blob and is replaced as a whole on every write.
//!
//! Components:
//! - `storage_trait`: the Storage trait defining a uniform slot API.
//! - `file_storage`: filesystem-backed implementation, one file per key.
//! - `memory_storage`: in-process implementation for tests and embedding.

pub mod file_storage;
pub mod memory_storage;
pub mod storage_trait;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
pub use storage_trait::Storage;
