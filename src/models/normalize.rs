use crate::domain::{Candle, OhlcRecord, RawTime};
use crate::utils::TimeUtils;

/// Parse the time of every record, keeping order and count intact.
///
/// Records whose time cannot be understood are kept with `timestamp: None`
/// and their raw time text as the label. Prices are passed through as-is.
pub fn normalize_records(records: &[OhlcRecord]) -> Vec<Candle> {
    records
        .iter()
        .enumerate()
        .map(|(idx, record)| normalize_record(idx, record))
        .collect()
}

fn normalize_record(idx: usize, record: &OhlcRecord) -> Candle {
    let timestamp = match &record.time {
        RawTime::Millis(ms) => TimeUtils::epoch_ms_to_naive(*ms),
        RawTime::Text(s) => TimeUtils::parse_timestamp(s),
        RawTime::Other(_) => None,
    };

    let label = match timestamp {
        Some(dt) => dt.format(TimeUtils::FMT_DAY_MONTH).to_string(),
        None => {
            log::warn!(
                "Record #{}: unparseable time '{}', keeping raw label",
                idx,
                record.time
            );
            record.time.to_string()
        }
    };

    Candle {
        timestamp,
        label,
        open_price: record.open,
        high_price: record.high,
        low_price: record.low,
        close_price: record.close,
        volume: record.volume,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_order_and_count() {
        let records = vec![
            OhlcRecord::new("2025-07-03", 1.0, 2.0, 0.5, 1.5),
            OhlcRecord::new("2025-07-01", 2.0, 3.0, 1.5, 2.5),
            OhlcRecord::new("garbage", 3.0, 4.0, 2.5, 3.5),
        ];
        let candles = normalize_records(&records);
        assert_eq!(candles.len(), 3);
        assert_eq!(candles[0].label, "03 Jul");
        assert_eq!(candles[1].label, "01 Jul");
        assert_eq!(candles[2].open_price, 3.0);
    }

    #[test]
    fn test_unparseable_time_falls_back_to_raw_label() {
        let records = vec![OhlcRecord::new("not a date", 10.0, 12.0, 9.0, 11.0)];
        let candles = normalize_records(&records);
        assert!(candles[0].timestamp.is_none());
        assert_eq!(candles[0].label, "not a date");
    }

    #[test]
    fn test_malformed_prices_are_not_corrected() {
        // high below low stays exactly as supplied
        let records = vec![OhlcRecord::new("2025-07-01", 10.0, 5.0, 20.0, 11.0).with_volume(42.0)];
        let candle = &normalize_records(&records)[0];
        assert_eq!(candle.high_price, 5.0);
        assert_eq!(candle.low_price, 20.0);
        assert_eq!(candle.volume, Some(42.0));
    }

    #[test]
    fn test_millis_time() {
        let record = OhlcRecord {
            time: RawTime::Millis(1_751_414_400_000),
            open: 1.0,
            high: 1.0,
            low: 1.0,
            close: 1.0,
            volume: None,
        };
        let candle = &normalize_records(&[record])[0];
        assert!(candle.timestamp.is_some());
        assert_eq!(candle.label, "02 Jul");
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_records(&[]).is_empty());
    }
}
