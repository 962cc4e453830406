//! Hydration log: a persisted list of drink records and daily summaries over it.

pub mod configuration;
pub mod error_handling;
pub mod presentation;
pub mod records;
pub mod storage;
pub mod summary;
