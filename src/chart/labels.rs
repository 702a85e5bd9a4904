//! Zoom-adaptive x-axis labels.
//!
//! The less of the timeline is visible, the more temporal precision a label
//! carries: month → day + month → day + month + time → time only.

use strum_macros::{Display, EnumIter};

use crate::chart::Viewport;
use crate::config::ZoomThresholds;
use crate::domain::Candle;
use crate::utils::TimeUtils;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, EnumIter)]
pub enum LabelGranularity {
    #[strum(to_string = "Month")]
    Month,
    #[strum(to_string = "Day")]
    DayMonth,
    #[strum(to_string = "Day + Time")]
    DayMonthTime,
    #[strum(to_string = "Time")]
    Time,
}

impl LabelGranularity {
    pub fn format_str(self) -> &'static str {
        match self {
            Self::Month => TimeUtils::FMT_MONTH,
            Self::DayMonth => TimeUtils::FMT_DAY_MONTH,
            Self::DayMonthTime => TimeUtils::FMT_DAY_MONTH_TIME,
            Self::Time => TimeUtils::FMT_TIME_12H,
        }
    }
}

/// Fraction of the whole dataset visible in the viewport. `None` for an empty dataset.
pub fn zoom_level(viewport: Viewport, candle_count: usize) -> Option<f64> {
    if candle_count == 0 {
        return None;
    }
    Some(viewport.span() / candle_count as f64)
}

/// First band whose bound the zoom level exceeds, checked from coarsest to finest.
pub fn select_granularity(zoom: f64, thresholds: &ZoomThresholds) -> LabelGranularity {
    if zoom > thresholds.month {
        LabelGranularity::Month
    } else if zoom > thresholds.day_month {
        LabelGranularity::DayMonth
    } else if zoom > thresholds.day_time {
        LabelGranularity::DayMonthTime
    } else {
        LabelGranularity::Time
    }
}

/// Resolve a renderer axis value to a candle index.
/// Non-finite values and anything outside `[0, len)` yield `None`.
pub fn resolve_index(raw_value: f64, len: usize) -> Option<usize> {
    if !raw_value.is_finite() {
        return None;
    }
    let idx = raw_value.round();
    if idx < 0.0 || idx >= len as f64 {
        return None;
    }
    Some(idx as usize)
}

/// Axis label for the candle at `raw_value`, or an empty string when there is
/// nothing sensible to show (out of range, unparseable time).
pub fn format_axis_label(
    raw_value: f64,
    candles: &[Candle],
    viewport: Viewport,
    thresholds: &ZoomThresholds,
) -> String {
    let Some(idx) = resolve_index(raw_value, candles.len()) else {
        log::trace!("Axis label out of range: {:.2} (n = {})", raw_value, candles.len());
        return String::new();
    };
    let Some(timestamp) = candles[idx].timestamp else {
        return String::new();
    };
    let Some(zoom) = zoom_level(viewport, candles.len()) else {
        return String::new();
    };

    let granularity = select_granularity(zoom, thresholds);
    timestamp.format(granularity.format_str()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OhlcRecord;
    use crate::models::normalize_records;
    use strum::IntoEnumIterator;

    fn candles(n: usize) -> Vec<Candle> {
        let records: Vec<OhlcRecord> = (0..n)
            .map(|i| {
                let time = format!("2025-01-05 {:02}:30", 14 + (i % 10));
                OhlcRecord::new(time.as_str(), 1.0, 2.0, 0.5, 1.5)
            })
            .collect();
        normalize_records(&records)
    }

    fn viewport_for_zoom(zoom: f64, n: usize) -> Viewport {
        Viewport::new(0.0, zoom * n as f64)
    }

    #[test]
    fn test_granularity_bands() {
        let z = ZoomThresholds::DEFAULT;
        assert_eq!(select_granularity(1.0, &z), LabelGranularity::Month);
        assert_eq!(select_granularity(0.81, &z), LabelGranularity::Month);
        assert_eq!(select_granularity(0.8, &z), LabelGranularity::DayMonth);
        assert_eq!(select_granularity(0.5, &z), LabelGranularity::DayMonth);
        assert_eq!(select_granularity(0.4, &z), LabelGranularity::DayMonthTime);
        assert_eq!(select_granularity(0.2, &z), LabelGranularity::DayMonthTime);
        assert_eq!(select_granularity(0.1, &z), LabelGranularity::Time);
        assert_eq!(select_granularity(0.0, &z), LabelGranularity::Time);
    }

    #[test]
    fn test_labels_gain_precision_as_zoom_decreases() {
        let data = candles(10);
        let z = ZoomThresholds::DEFAULT;
        let label = |zoom: f64| format_axis_label(0.0, &data, viewport_for_zoom(zoom, 10), &z);

        assert_eq!(label(1.0), "Jan");
        assert_eq!(label(0.6), "05 Jan");
        assert_eq!(label(0.3), "05 Jan 14:30");
        assert_eq!(label(0.05), "02:30 PM");
    }

    #[test]
    fn test_granularity_order_is_monotonic() {
        let z = ZoomThresholds::DEFAULT;
        let zooms = [0.95, 0.6, 0.25, 0.05];
        let picked: Vec<LabelGranularity> =
            zooms.iter().map(|&zoom| select_granularity(zoom, &z)).collect();
        assert!(picked.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(picked, LabelGranularity::iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_out_of_range_is_empty() {
        let data = candles(5);
        let vp = Viewport::new(0.0, 5.0);
        let z = ZoomThresholds::DEFAULT;
        assert_eq!(format_axis_label(-1.0, &data, vp, &z), "");
        assert_eq!(format_axis_label(5.0, &data, vp, &z), "");
        assert_eq!(format_axis_label(f64::NAN, &data, vp, &z), "");
        assert_eq!(format_axis_label(f64::INFINITY, &data, vp, &z), "");
        assert_eq!(format_axis_label(0.0, &[], vp, &z), "");
        assert_eq!(format_axis_label(4.0, &data, vp, &z), "Jan");
    }

    #[test]
    fn test_fractional_values_round_to_nearest_candle() {
        assert_eq!(resolve_index(1.4, 3), Some(1));
        assert_eq!(resolve_index(1.6, 3), Some(2));
        assert_eq!(resolve_index(2.6, 3), None);
        assert_eq!(resolve_index(-0.4, 3), Some(0));
    }

    #[test]
    fn test_unparseable_time_is_blank() {
        let data = normalize_records(&[OhlcRecord::new("someday", 1.0, 2.0, 0.5, 1.5)]);
        let vp = Viewport::new(0.0, 1.0);
        assert_eq!(format_axis_label(0.0, &data, vp, &ZoomThresholds::DEFAULT), "");
    }

    #[test]
    fn test_custom_thresholds() {
        let data = candles(10);
        let z = ZoomThresholds::new(0.9, 0.5, 0.2).unwrap();
        let vp = viewport_for_zoom(0.85, 10);
        assert_eq!(format_axis_label(0.0, &data, vp, &z), "05 Jan");
    }
}
