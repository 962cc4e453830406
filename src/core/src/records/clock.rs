use chrono::{DateTime, Local};

/// Source of "now" for record creation.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock in the machine's local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// `YYYY-MM-DD` in local time.
pub fn format_date(instant: &DateTime<Local>) -> String {
    instant.format("%Y-%m-%d").to_string()
}

/// `HH:MM:SS`, 24-hour, in local time.
pub fn format_time(instant: &DateTime<Local>) -> String {
    instant.format("%H:%M:%S").to_string()
}
