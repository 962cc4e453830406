//! Terminal presentation of records and summaries.
//!
//! Only string building lives here; the binary decides where output goes.

pub mod render;

pub use render::{
    format_full_date_time, praise, render_day, render_history, render_record, render_records, render_summary,
    EMPTY_MESSAGE,
};
