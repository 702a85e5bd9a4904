use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Raw time field of an incoming record: epoch milliseconds or any string
/// the normalizer may (or may not) understand.
///
/// Anything else (fractional numbers, `null`, objects) lands in `Other` so a
/// single odd value never fails the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTime {
    Millis(i64),
    Text(String),
    Other(serde_json::Value),
}

impl fmt::Display for RawTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Millis(ms) => write!(f, "{}", ms),
            Self::Text(s) => f.write_str(s),
            Self::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for RawTime {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A price record as supplied by the data loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcRecord {
    pub time: RawTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl OhlcRecord {
    // A constructor for convenience
    pub fn new(time: impl Into<RawTime>, open: f64, high: f64, low: f64, close: f64) -> Self {
        OhlcRecord {
            time: time.into(),
            open,
            high,
            low,
            close,
            volume: None,
        }
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }
}

// Define the CandleType enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CandleType {
    #[strum(to_string = "Bull")]
    Bullish,
    #[strum(to_string = "Bear")]
    Bearish,
}

impl CandleType {
    /// Ties (close == open) count as bullish.
    pub fn classify(open: f64, close: f64) -> Self {
        if close >= open {
            CandleType::Bullish
        } else {
            CandleType::Bearish
        }
    }
}

/// A normalized record. `timestamp` is `None` when the raw time could not be
/// parsed; `label` then holds the raw text unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    pub timestamp: Option<NaiveDateTime>,
    pub label: String,

    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,

    pub volume: Option<f64>,
}

impl Candle {
    // A method to determine the type of candle
    pub fn get_type(&self) -> CandleType {
        CandleType::classify(self.open_price, self.close_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_tie_is_bullish() {
        assert_eq!(CandleType::classify(100.0, 100.0), CandleType::Bullish);
        assert_eq!(CandleType::classify(100.0, 99.99), CandleType::Bearish);
    }

    #[test]
    fn test_candle_type_labels() {
        assert_eq!(CandleType::Bullish.to_string(), "Bull");
        assert_eq!(CandleType::Bearish.to_string(), "Bear");
    }

    #[test]
    fn test_record_deserializes_string_and_millis_time() {
        let json = r#"[
            {"time": "2025-07-01", "open": 100, "high": 110, "low": 95, "close": 108},
            {"time": 1751414400000, "open": 108, "high": 109, "low": 100, "close": 102, "volume": 5000}
        ]"#;
        let records: Vec<OhlcRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].time, RawTime::Text("2025-07-01".into()));
        assert_eq!(records[0].volume, None);
        assert_eq!(records[1].time, RawTime::Millis(1_751_414_400_000));
        assert_eq!(records[1].volume, Some(5000.0));
    }

    #[test]
    fn test_odd_time_values_are_kept_as_other() {
        let json = r#"[
            {"time": 1751414400000.5, "open": 1, "high": 1, "low": 1, "close": 1},
            {"time": null, "open": 1, "high": 1, "low": 1, "close": 1}
        ]"#;
        let records: Vec<OhlcRecord> = serde_json::from_str(json).unwrap();
        assert!(matches!(records[0].time, RawTime::Other(_)));
        assert_eq!(records[1].time, RawTime::Other(serde_json::Value::Null));
        assert_eq!(records[1].time.to_string(), "null");
    }
}
