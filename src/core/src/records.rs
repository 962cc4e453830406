//! Drink records and the store that persists them.
//!
//! - `types`: the `DrinkRecord` shape written to the persistence slot.
//! - `clock`: source of the current local instant and the date/time formats.
//! - `record_store`: add, list, delete and clear over a `Storage` slot.

pub mod clock;
pub mod record_store;
pub mod types;

pub use clock::{format_date, format_time, Clock, SystemClock};
pub use record_store::{RecordStore, DEFAULT_STORAGE_KEY};
pub use types::{DrinkRecord, LEGACY_DISPLAY_VOLUME};
