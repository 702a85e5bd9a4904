use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub struct TimeUtils;

impl TimeUtils {
    pub const FMT_MONTH: &str = "%b";
    pub const FMT_DAY_MONTH: &str = "%d %b";
    pub const FMT_DAY_MONTH_TIME: &str = "%d %b %H:%M";
    pub const FMT_TIME_12H: &str = "%I:%M %p";
    pub const FMT_TOOLTIP: &str = "%d %b %Y, %H:%M";
    pub const FMT_DATE_ONLY: &str = "%Y-%m-%d";

    // Tried in order after RFC 3339. `%.f` also accepts a missing fraction.
    const DATETIME_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    /// Parse a textual timestamp into UTC wall-clock time.
    pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
        let s = raw.trim();
        if s.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.naive_utc());
        }

        for fmt in Self::DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(dt);
            }
        }

        NaiveDate::parse_from_str(s, Self::FMT_DATE_ONLY)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    }

    pub fn epoch_ms_to_naive(epoch_ms: i64) -> Option<NaiveDateTime> {
        DateTime::from_timestamp_millis(epoch_ms).map(|dt| dt.naive_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_date_only_is_midnight() {
        let dt = TimeUtils::parse_timestamp("2025-07-01").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2025, 7, 1));
        assert_eq!((dt.hour(), dt.minute()), (0, 0));
    }

    #[test]
    fn test_parse_rfc3339_converts_to_utc() {
        let dt = TimeUtils::parse_timestamp("2025-07-01T14:30:00+05:30").unwrap();
        assert_eq!((dt.hour(), dt.minute()), (9, 0));
    }

    #[test]
    fn test_parse_naive_variants() {
        for raw in [
            "2025-07-01T14:30:00",
            "2025-07-01 14:30:00",
            "2025-07-01 14:30:00.250",
            "2025-07-01T14:30",
            "2025-07-01 14:30",
        ] {
            let dt = TimeUtils::parse_timestamp(raw).unwrap_or_else(|| panic!("{raw}"));
            assert_eq!((dt.hour(), dt.minute()), (14, 30), "{raw}");
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(TimeUtils::parse_timestamp("").is_none());
        assert!(TimeUtils::parse_timestamp("yesterday").is_none());
        assert!(TimeUtils::parse_timestamp("2025-13-01").is_none());
    }

    #[test]
    fn test_epoch_ms() {
        let dt = TimeUtils::epoch_ms_to_naive(1_751_414_400_000).unwrap();
        assert_eq!(dt.format(TimeUtils::FMT_DATE_ONLY).to_string(), "2025-07-02");
    }
}
