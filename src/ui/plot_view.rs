use eframe::egui::Ui;
use egui_plot::{AxisHints, GridInput, GridMark, HPlacement, Plot, VPlacement};

use crate::chart::{AxisLabelFn, ChartConfig, PriceLabelFn, Viewport};
use crate::models::price_bounds;
use crate::ui::UI_TEXT;

use crate::ui::plot_layers::{
    AnnotationLayer, CandlestickLayer, LayerContext, PlotLayer, TooltipLayer, TrendLineLayer,
};

/// Hosts the chart plot and remembers the viewport it last reported.
#[derive(Default)]
pub struct PlotView {
    last_viewport: Option<Viewport>,
}

// Helper: Calculate a human-friendly step size (1, 2, 5, 10, 20, 50...)
fn calculate_adaptive_step(range: f64, target_count: f64) -> f64 {
    let raw_step = range / target_count.max(1.0);
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return 1.0;
    }
    // Find magnitude (power of 10)
    let mag = 10.0_f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / mag; // Scale to 1.0 .. 10.0

    // Snap to "Nice" integers
    let nice_step = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };

    // Ensure we never step less than 1 visual unit (1 candle)
    (nice_step * mag).max(1.0)
}

fn candle_grid_marks(input: GridInput, target_ticks: f64) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    let step = calculate_adaptive_step(max - min, target_ticks);

    let start = (min / step).ceil() as i64;
    let end = (max / step).floor() as i64;

    (start..=end)
        .map(|i| GridMark {
            value: i as f64 * step,
            step_size: step,
        })
        .collect()
}

// The renderer hands us the visible x-range with every mark: that range is the viewport.
fn create_time_axis(label_fn: AxisLabelFn) -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis.as_str())
        .formatter(move |mark, range| label_fn(mark.value, Viewport::from(range)))
        .placement(VPlacement::Bottom)
}

fn create_price_axis(label_fn: PriceLabelFn) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis.as_str())
        .formatter(move |mark, _range| label_fn(mark.value))
        .placement(HPlacement::Right)
}

impl PlotView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_viewport(&self) -> Option<Viewport> {
        self.last_viewport
    }

    // Price envelope plus configured padding; a flat series still gets some height.
    fn calculate_y_bounds(config: &ChartConfig) -> (f64, f64) {
        let (lo, hi) = price_bounds(&config.price.data).unwrap_or((0.0, 1.0));
        let range = (hi - lo).max(hi.abs() * 0.01).max(f64::EPSILON);
        let pad = range * config.style.plot_y_padding_pct;
        (lo - pad, hi + pad)
    }

    fn calculate_x_bounds(config: &ChartConfig) -> (f64, f64) {
        let n = config.len().max(1) as f64;
        let pad = n * config.style.plot_x_padding_pct;
        (-0.5 - pad, n - 0.5 + pad)
    }

    pub fn show(&mut self, ui: &mut Ui, config: &ChartConfig) {
        if config.is_empty() {
            ui.centered_and_justified(|ui| ui.label(&UI_TEXT.error_no_data));
            self.last_viewport = None;
            return;
        }

        let y_bounds = Self::calculate_y_bounds(config);
        let (x_min, x_max) = Self::calculate_x_bounds(config);
        let target_ticks = config.style.x_axis_target_ticks;
        let interaction = config.interaction;

        let response = Plot::new(UI_TEXT.plot_id.as_str())
            .custom_x_axes(vec![create_time_axis(config.x_axis_label.clone())])
            .custom_y_axes(vec![create_price_axis(config.y_axis_label.clone())])
            .label_formatter(|_, _| String::new())
            .x_grid_spacer(move |input| candle_grid_marks(input, target_ticks))
            .include_x(x_min)
            .include_x(x_max)
            .include_y(y_bounds.0)
            .include_y(y_bounds.1)
            .allow_zoom(interaction.zoom)
            .allow_scroll(interaction.pan)
            .allow_drag(interaction.pan)
            .allow_double_click_reset(interaction.reset)
            .show(ui, |plot_ui| {
                let ctx = LayerContext { config, y_bounds };

                let layers: [&dyn PlotLayer; 4] = [
                    &AnnotationLayer,
                    &CandlestickLayer,
                    &TrendLineLayer,
                    &TooltipLayer,
                ];
                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }

                Viewport::from(&plot_ui.plot_bounds().range_x())
            });

        let viewport = response.inner;
        if self.last_viewport != Some(viewport) {
            log::debug!(
                "Viewport changed: {:.2}..{:.2}",
                viewport.min_visible,
                viewport.max_visible
            );
        }
        self.last_viewport = Some(viewport);
    }
}
