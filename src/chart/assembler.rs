use std::sync::Arc;

use strum_macros::Display;

use crate::chart::labels::format_axis_label;
use crate::chart::tooltip::{TooltipContent, format_price, tooltip_for};
use crate::chart::Viewport;
use crate::config::{ChartSettings, PLOT_CONFIG, plot::PlotConfig};
use crate::domain::{Candle, OhlcRecord};
use crate::models::{
    Annotation, ChartSeries, PlotPoint, TrendPoint, build_annotations, build_series,
    normalize_records,
};
use crate::ui::UI_TEXT;

/// `(raw axis value, visible range) -> label`
pub type AxisLabelFn = Arc<dyn Fn(f64, Viewport) -> String + Send + Sync>;
/// `(price) -> label`
pub type PriceLabelFn = Arc<dyn Fn(f64) -> String + Send + Sync>;
/// `(series index, point index) -> tooltip`
pub type TooltipFn = Arc<dyn Fn(usize, usize) -> Option<TooltipContent> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ChartType {
    #[strum(to_string = "candlestick")]
    Candlestick,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamedSeries<T> {
    pub name: String,
    pub data: Vec<T>,
}

/// Which gestures the renderer should allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interaction {
    pub zoom: bool,
    pub pan: bool,
    pub reset: bool,
}

impl Default for Interaction {
    fn default() -> Self {
        Self {
            zoom: true,
            pan: true,
            reset: true,
        }
    }
}

/// Everything the renderer needs to draw one chart.
pub struct ChartConfig {
    pub chart_type: ChartType,
    pub title: String,
    pub price: NamedSeries<PlotPoint>,
    pub trend: NamedSeries<TrendPoint>,
    pub categories: Vec<String>,
    pub annotations: Vec<Annotation>,
    pub interaction: Interaction,
    pub style: &'static PlotConfig,
    pub x_axis_label: AxisLabelFn,
    pub y_axis_label: PriceLabelFn,
    pub tooltip: TooltipFn,
    candles: Arc<[Candle]>,
}

impl ChartConfig {
    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }
}

/// Normalize, build series and annotations, and wire the formatter callbacks.
pub fn assemble_chart(records: &[OhlcRecord], settings: &ChartSettings) -> ChartConfig {
    crate::trace_time!("Assemble chart", 5_000, {
        let candles: Arc<[Candle]> = normalize_records(records).into();
        let ChartSeries {
            ohlc,
            trend,
            categories,
        } = build_series(&candles);
        let annotations = build_annotations(&ohlc, settings.annotation_window);

        log::info!(
            "Assembled chart '{}': {} candles, {} annotations",
            settings.title,
            candles.len(),
            annotations.len()
        );

        let x_axis_label: AxisLabelFn = {
            let candles = Arc::clone(&candles);
            let thresholds = settings.zoom;
            Arc::new(move |raw, viewport| format_axis_label(raw, &candles, viewport, &thresholds))
        };

        let y_axis_label: PriceLabelFn = {
            let symbol = settings.currency_symbol;
            Arc::new(move |price| format_price(price, symbol))
        };

        let tooltip: TooltipFn = {
            let candles = Arc::clone(&candles);
            let points: Arc<[PlotPoint]> = ohlc.as_slice().into();
            let categories: Arc<[String]> = categories.as_slice().into();
            let symbol = settings.currency_symbol;
            Arc::new(move |series_idx, point_idx| {
                tooltip_for(series_idx, point_idx, &points, &categories, &candles, symbol)
            })
        };

        ChartConfig {
            chart_type: ChartType::Candlestick,
            title: settings.title.clone(),
            price: NamedSeries {
                name: UI_TEXT.series_price.clone(),
                data: ohlc,
            },
            trend: NamedSeries {
                name: UI_TEXT.series_trend.clone(),
                data: trend,
            },
            categories,
            annotations,
            interaction: Interaction::default(),
            style: &PLOT_CONFIG,
            x_axis_label,
            y_axis_label,
            tooltip,
            candles,
        }
    })
}
