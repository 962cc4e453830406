use std::collections::BTreeMap;

use crate::records::types::DrinkRecord;
use crate::summary::{daily_summary, DailySummary};

pub const EMPTY_MESSAGE: &str = "No records yet. Drink some water!";

/// `Today HH:MM:SS` for today's records, `YYYY/MM/DD HH:MM:SS` otherwise.
pub fn format_full_date_time(date: &str, time: &str, is_today: bool) -> String {
    if is_today {
        return format!("Today {}", time);
    }
    let mut parts = date.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) => format!("{}/{}/{} {}", year, month, day, time),
        // not a date we wrote; show it as stored
        _ => format!("{} {}", date, time),
    }
}

pub fn render_record(record: &DrinkRecord, today: &str) -> String {
    format!(
        "💧 {}  {}ml  [id {}]",
        format_full_date_time(&record.date, &record.time, record.date == today),
        record.display_volume(),
        record.id
    )
}

pub fn render_summary(summary: &DailySummary) -> String {
    format!(
        "Today: {} drink(s), {}ml",
        summary.count, summary.total_volume
    )
}

/// Summary line followed by one line per record, or the empty-state message.
pub fn render_records(records: &[DrinkRecord], today: &str) -> String {
    if records.is_empty() {
        return format!(
            "{}\n{}",
            render_summary(&DailySummary::default()),
            EMPTY_MESSAGE
        );
    }

    let mut lines = vec![render_summary(&daily_summary(records, today))];
    lines.extend(records.iter().map(|r| render_record(r, today)));
    lines.join("\n")
}

/// One line for one date, e.g. `2024-01-01  2 drink(s)  500ml`.
pub fn render_day(date: &str, summary: &DailySummary) -> String {
    format!(
        "{}  {} drink(s)  {}ml",
        date, summary.count, summary.total_volume
    )
}

/// Per-day totals, newest date first.
pub fn render_history(totals: &BTreeMap<String, DailySummary>) -> String {
    if totals.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }
    totals
        .iter()
        .rev()
        .map(|(date, s)| render_day(date, s))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Shown after every logged drink.
pub fn praise(volume: i64) -> String {
    format!("Great job! +{}ml", volume)
}
