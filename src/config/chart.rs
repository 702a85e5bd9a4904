//! Chart behaviour constants (annotation window, label zoom bands, currency)

use anyhow::{Result, bail};

/// Zoom-level bands for the adaptive x-axis labels.
/// A band is selected when the zoom level is strictly greater than its bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomThresholds {
    pub month: f64,
    pub day_month: f64,
    pub day_time: f64,
}

impl ZoomThresholds {
    pub const DEFAULT: Self = Self {
        month: 0.8,
        day_month: 0.4,
        day_time: 0.1,
    };

    /// Validated constructor: bounds must be finite and strictly descending.
    pub fn new(month: f64, day_month: f64, day_time: f64) -> Result<Self> {
        if !(month.is_finite() && day_month.is_finite() && day_time.is_finite()) {
            bail!(
                "Zoom thresholds must be finite (got {}, {}, {})",
                month,
                day_month,
                day_time
            );
        }
        if !(month > day_month && day_month > day_time) {
            bail!(
                "Zoom thresholds must be strictly descending: month ({}) > day_month ({}) > day_time ({})",
                month,
                day_month,
                day_time
            );
        }
        Ok(Self {
            month,
            day_month,
            day_time,
        })
    }
}

impl Default for ZoomThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSettings {
    /// How many of the most recent candles receive a Bull/Bear annotation
    pub annotation_window: usize,
    pub zoom: ZoomThresholds,
    pub currency_symbol: &'static str,
    pub title: String,
}

pub struct ChartDefaults {
    pub annotation_window: usize,
    pub zoom: ZoomThresholds,
    pub currency_symbol: &'static str,
    pub title: &'static str,
}

pub const CHART_DEFAULTS: ChartDefaults = ChartDefaults {
    annotation_window: 10,
    zoom: ZoomThresholds::DEFAULT,
    currency_symbol: "₹",
    title: "Candlestick Chart with Trend Stripes",
};

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            annotation_window: CHART_DEFAULTS.annotation_window,
            zoom: CHART_DEFAULTS.zoom,
            currency_symbol: CHART_DEFAULTS.currency_symbol,
            title: CHART_DEFAULTS.title.to_string(),
        }
    }
}
