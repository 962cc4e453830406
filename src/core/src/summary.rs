//! Summary Calculator
//!
//! Pure aggregation over a slice of records. The reference date is always
//! supplied by the caller; nothing here reads the wall clock except `today`.

use std::collections::BTreeMap;

use crate::records::clock::{format_date, Clock};
use crate::records::types::DrinkRecord;

/// Drinks logged on one calendar date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DailySummary {
    pub count: usize,
    pub total_volume: i64,
}

impl DailySummary {
    fn push(&mut self, record: &DrinkRecord) {
        self.count += 1;
        self.total_volume = self.total_volume.saturating_add(record.counted_volume());
    }
}

/// Count and total volume of the records whose `date` equals `reference_date`.
///
/// Records without a positive volume are counted but add nothing to the total.
pub fn daily_summary(records: &[DrinkRecord], reference_date: &str) -> DailySummary {
    records
        .iter()
        .filter(|r| r.date == reference_date)
        .fold(DailySummary::default(), |mut summary, r| {
            summary.push(r);
            summary
        })
}

/// Per-date summaries for every date present in `records`, keyed by `YYYY-MM-DD`.
pub fn daily_totals(records: &[DrinkRecord]) -> BTreeMap<String, DailySummary> {
    let mut totals: BTreeMap<String, DailySummary> = BTreeMap::new();
    for record in records {
        totals.entry(record.date.clone()).or_default().push(record);
    }
    totals
}

/// Today's date in the same format the record store writes.
pub fn today(clock: &dyn Clock) -> String {
    format_date(&clock.now())
}
