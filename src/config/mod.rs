//! Configuration module for the candle chart.

mod chart;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use chart::{CHART_DEFAULTS, ChartSettings, ZoomThresholds};
pub use plot::{DirectionColor, PLOT_CONFIG, apply_opacity};

/// Report slow chart assembly via `trace_time!`
pub const LOG_PERFORMANCE: bool = cfg!(debug_assertions);
