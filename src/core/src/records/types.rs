use serde::{Deserialize, Serialize};

/// Volume shown for records written before volumes were tracked.
pub const LEGACY_DISPLAY_VOLUME: i64 = 250;

/// One logged drink, as persisted in the records slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkRecord {
    /// Primary key, derived from the creation millisecond
    pub id: i64,

    /// Milliseconds since the Unix epoch at creation
    pub timestamp: i64,

    /// Local calendar date at creation, `YYYY-MM-DD`
    pub date: String,

    /// Local time of day at creation, `HH:MM:SS`
    pub time: String,

    /// Amount drunk in milliliters. Absent on legacy records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<i64>,
}

impl DrinkRecord {
    /// Volume to show to the user; legacy and non-positive values display as 250ml.
    pub fn display_volume(&self) -> i64 {
        self.volume
            .filter(|v| *v > 0)
            .unwrap_or(LEGACY_DISPLAY_VOLUME)
    }

    /// Volume that counts toward totals; legacy and non-positive values count as 0.
    pub fn counted_volume(&self) -> i64 {
        self.volume.filter(|v| *v > 0).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy_record() -> DrinkRecord {
        serde_json::from_str(
            r#"{"id":1704067200000,"timestamp":1704067200000,"date":"2024-01-01","time":"08:00:00"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_legacy_record_without_volume() {
        let record = legacy_record();
        assert_eq!(record.volume, None);
        assert_eq!(record.display_volume(), 250);
        assert_eq!(record.counted_volume(), 0);
    }

    #[test]
    fn test_non_positive_volume_fallbacks() {
        let mut record = legacy_record();
        record.volume = Some(0);
        assert_eq!(record.display_volume(), 250);
        assert_eq!(record.counted_volume(), 0);

        record.volume = Some(-20);
        assert_eq!(record.display_volume(), 250);
        assert_eq!(record.counted_volume(), 0);

        record.volume = Some(330);
        assert_eq!(record.display_volume(), 330);
        assert_eq!(record.counted_volume(), 330);
    }

    #[test]
    fn test_legacy_record_is_written_back_unchanged() {
        let json = serde_json::to_string(&legacy_record()).unwrap();
        assert!(!json.contains("volume"));
    }

    #[test]
    fn test_field_names_on_the_wire() {
        let record = DrinkRecord {
            id: 5,
            timestamp: 5,
            date: "2024-01-02".into(),
            time: "09:10:11".into(),
            volume: Some(500),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 5,
                "timestamp": 5,
                "date": "2024-01-02",
                "time": "09:10:11",
                "volume": 500
            })
        );
    }
}
