//! Chart model: adaptive labels, tooltips and the assembled renderer configuration.

mod assembler;
pub mod labels;
pub mod tooltip;

use std::ops::RangeInclusive;

pub use assembler::{
    AxisLabelFn, ChartConfig, ChartType, Interaction, NamedSeries, PriceLabelFn, TooltipFn,
    assemble_chart,
};
pub use labels::{LabelGranularity, format_axis_label, select_granularity, zoom_level};
pub use tooltip::{TooltipContent, build_tooltip, percent_change, tooltip_for};

/// Visible x-range in index units, as last reported by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub min_visible: f64,
    pub max_visible: f64,
}

impl Viewport {
    pub fn new(min_visible: f64, max_visible: f64) -> Self {
        Self {
            min_visible,
            max_visible,
        }
    }

    pub fn span(&self) -> f64 {
        self.max_visible - self.min_visible
    }
}

impl From<&RangeInclusive<f64>> for Viewport {
    fn from(range: &RangeInclusive<f64>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}
