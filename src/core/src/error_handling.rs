//! Error types shared by the storage, record and configuration layers.

pub mod types;
