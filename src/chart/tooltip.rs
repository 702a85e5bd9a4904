use std::fmt;

use eframe::egui::Color32;

use crate::domain::{Candle, CandleType};
use crate::models::PlotPoint;
use crate::config::DirectionColor;
use crate::ui::UI_TEXT;
use crate::utils::TimeUtils;

/// Series indices understood by the tooltip lookup.
pub const PRICE_SERIES: usize = 0;
pub const TREND_SERIES: usize = 1;

/// Structured hover payload for one candle.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub date: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: Option<String>,
    pub change: String,
    pub change_color: Color32,
    pub direction: CandleType,
}

/// Price with currency prefix and 2 decimals, e.g. `₹108.00`.
pub fn format_price(value: f64, currency_symbol: &str) -> String {
    format!("{}{:.2}", currency_symbol, value)
}

/// `((close - open) / open) * 100` rounded to 2 decimals.
/// `None` when open is zero or the result is not a finite number.
pub fn percent_change(open: f64, close: f64) -> Option<f64> {
    if open == 0.0 {
        return None;
    }
    let pct = (close - open) / open * 100.0;
    if !pct.is_finite() {
        return None;
    }
    Some((pct * 100.0).round() / 100.0)
}

pub fn format_percent_change(open: f64, close: f64) -> String {
    match percent_change(open, close) {
        Some(pct) => format!("{:+.2}%", pct),
        None => UI_TEXT.tt_not_available.clone(),
    }
}

/// `category` is the point's axis label; it stands in for the date when the
/// candle time could not be parsed.
pub fn build_tooltip(
    point: &PlotPoint,
    candle: &Candle,
    category: &str,
    currency_symbol: &str,
) -> TooltipContent {
    let direction = point.get_type();

    let date = match candle.timestamp {
        Some(dt) => dt.format(TimeUtils::FMT_TOOLTIP).to_string(),
        None => category.to_string(),
    };

    TooltipContent {
        date,
        open: format_price(point.open(), currency_symbol),
        high: format_price(point.high(), currency_symbol),
        low: format_price(point.low(), currency_symbol),
        close: format_price(point.close(), currency_symbol),
        volume: candle.volume.map(|v| format!("{:.0}", v)),
        change: format_percent_change(point.open(), point.close()),
        change_color: direction.color(),
        direction,
    }
}

/// Tooltip for `(series_index, point_index)` as reported by the renderer.
/// Both the price and the trend series share the candle x-domain.
pub fn tooltip_for(
    series_index: usize,
    point_index: usize,
    points: &[PlotPoint],
    categories: &[String],
    candles: &[Candle],
    currency_symbol: &str,
) -> Option<TooltipContent> {
    if series_index != PRICE_SERIES && series_index != TREND_SERIES {
        return None;
    }
    let point = points.get(point_index)?;
    let category = categories.get(point_index)?;
    let candle = candles.get(point_index)?;
    Some(build_tooltip(point, candle, category, currency_symbol))
}

impl fmt::Display for TooltipContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.date)?;
        writeln!(f, "{}: {}", UI_TEXT.tt_open, self.open)?;
        writeln!(f, "{}: {}", UI_TEXT.tt_close, self.close)?;
        writeln!(f, "{}: {}", UI_TEXT.tt_high, self.high)?;
        writeln!(f, "{}: {}", UI_TEXT.tt_low, self.low)?;
        if let Some(volume) = &self.volume {
            writeln!(f, "{}: {}", UI_TEXT.tt_volume, volume)?;
        }
        write!(f, "{}: {}", UI_TEXT.tt_change, self.change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PLOT_CONFIG;
    use crate::domain::OhlcRecord;
    use crate::models::{ChartSeries, build_series, normalize_records};

    fn scenario() -> (ChartSeries, Vec<Candle>) {
        let candles = normalize_records(&[
            OhlcRecord::new("2025-07-01", 100.0, 110.0, 95.0, 108.0),
            OhlcRecord::new("2025-07-02", 108.0, 109.0, 100.0, 102.0),
        ]);
        (build_series(&candles), candles)
    }

    #[test]
    fn test_bearish_scenario() {
        let (series, candles) = scenario();
        let tt = tooltip_for(PRICE_SERIES, 1, &series.ohlc, &series.categories, &candles, "₹").unwrap();
        assert_eq!(tt.change, "-5.56%");
        assert_eq!(tt.change_color, PLOT_CONFIG.candle_bearish_color);
        assert_eq!(tt.direction, CandleType::Bearish);
        assert_eq!(tt.date, "02 Jul 2025, 00:00");
        assert_eq!(tt.open, "₹108.00");
        assert_eq!(tt.high, "₹109.00");
        assert_eq!(tt.low, "₹100.00");
        assert_eq!(tt.close, "₹102.00");
        assert_eq!(tt.volume, None);
    }

    #[test]
    fn test_bullish_scenario() {
        let (series, candles) = scenario();
        let tt = tooltip_for(PRICE_SERIES, 0, &series.ohlc, &series.categories, &candles, "$").unwrap();
        assert_eq!(tt.change, "+8.00%");
        assert_eq!(tt.change_color, PLOT_CONFIG.candle_bullish_color);
        assert_eq!(tt.close, "$108.00");
    }

    #[test]
    fn test_zero_open_is_not_a_number() {
        assert_eq!(percent_change(0.0, 5.0), None);
        assert_eq!(percent_change(0.0, 0.0), None);
        assert_eq!(format_percent_change(0.0, 5.0), "N/A");
        assert_eq!(format_percent_change(f64::NAN, 5.0), "N/A");

        let candles = normalize_records(&[OhlcRecord::new("2025-07-01", 0.0, 3.0, 0.0, 2.0)]);
        let series = build_series(&candles);
        let tt = tooltip_for(PRICE_SERIES, 0, &series.ohlc, &series.categories, &candles, "₹").unwrap();
        assert_eq!(tt.change, "N/A");
        assert!(!tt.to_string().contains("NaN"));
        assert!(!tt.to_string().contains("inf"));
    }

    #[test]
    fn test_lookup_bounds() {
        let (series, candles) = scenario();
        assert!(tooltip_for(PRICE_SERIES, 2, &series.ohlc, &series.categories, &candles, "₹").is_none());
        assert!(tooltip_for(2, 0, &series.ohlc, &series.categories, &candles, "₹").is_none());
        assert_eq!(
            tooltip_for(TREND_SERIES, 1, &series.ohlc, &series.categories, &candles, "₹"),
            tooltip_for(PRICE_SERIES, 1, &series.ohlc, &series.categories, &candles, "₹")
        );
    }

    #[test]
    fn test_idempotent() {
        let (series, candles) = scenario();
        let a = tooltip_for(PRICE_SERIES, 1, &series.ohlc, &series.categories, &candles, "₹").unwrap();
        let b = tooltip_for(PRICE_SERIES, 1, &series.ohlc, &series.categories, &candles, "₹").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_unparseable_time_uses_raw_label_and_volume_row() {
        let candles = normalize_records(&[
            OhlcRecord::new("week 27", 10.0, 11.0, 9.0, 10.0).with_volume(1234.0),
        ]);
        let series = build_series(&candles);
        let tt = tooltip_for(PRICE_SERIES, 0, &series.ohlc, &series.categories, &candles, "₹").unwrap();
        assert_eq!(tt.date, "week 27");
        assert_eq!(tt.change, "+0.00%");
        assert_eq!(tt.volume.as_deref(), Some("1234"));
        assert!(tt.to_string().contains("Volume: 1234"));
    }

    #[test]
    fn test_date_fallback_comes_from_category() {
        let (series, candles) = scenario();
        let renamed = vec!["first".to_string(), "second".to_string()];
        // parsed timestamps win over the category label
        let tt = tooltip_for(PRICE_SERIES, 1, &series.ohlc, &renamed, &candles, "₹").unwrap();
        assert_eq!(tt.date, "02 Jul 2025, 00:00");

        let odd = normalize_records(&[OhlcRecord::new("Q3", 10.0, 11.0, 9.0, 10.5)]);
        let tt = build_tooltip(&build_series(&odd).ohlc[0], &odd[0], "Q3 close", "₹");
        assert_eq!(tt.date, "Q3 close");

        assert!(tooltip_for(PRICE_SERIES, 1, &series.ohlc, &renamed[..1], &candles, "₹").is_none());
    }
}
