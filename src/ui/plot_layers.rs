use eframe::egui::{Align2, Color32, Id, LayerId, Order::Tooltip, RichText, Stroke, Ui};

#[allow(deprecated)]
use eframe::egui::show_tooltip_at_pointer;

use egui_plot::{Line, PlotPoint as ScreenPoint, PlotPoints, PlotUi, Polygon, Text};

use crate::chart::labels::resolve_index;
use crate::chart::tooltip::PRICE_SERIES;
use crate::chart::{ChartConfig, TooltipContent};
use crate::domain::CandleType;
use crate::config::DirectionColor;
use crate::ui::UI_TEXT;

/// Context passed to every layer during rendering.
/// This prevents argument explosion.
pub struct LayerContext<'a> {
    pub config: &'a ChartConfig,
    pub y_bounds: (f64, f64), // (min, max) of the padded price envelope
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. ANNOTATION LAYER (Bull/Bear stripes over the most recent candles)
// ============================================================================
pub struct AnnotationLayer;

impl PlotLayer for AnnotationLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let (y_min, y_max) = ctx.y_bounds;
        let style = ctx.config.style;

        for ann in &ctx.config.annotations {
            // Stripe is centred on the candle: [x - 0.5, x2 - 0.5)
            let x_start = ann.x as f64 - 0.5;
            let x_end = ann.x2 as f64 - 0.5;

            let points = PlotPoints::new(vec![
                [x_start, y_min],
                [x_end, y_min],
                [x_end, y_max],
                [x_start, y_max],
            ]);

            plot_ui.polygon(
                Polygon::new(&ann.label, points)
                    .fill_color(ann.fill_color)
                    .stroke(Stroke::new(style.annotation_border_width, ann.border_color)),
            );

            plot_ui.text(
                Text::new(
                    &ann.label,
                    ScreenPoint::new(ann.x as f64, y_max),
                    RichText::new(&ann.label)
                        .size(style.annotation_label_size)
                        .color(ann.border_color),
                )
                .anchor(Align2::CENTER_TOP),
            );
        }
    }
}

// ============================================================================
// 2. CANDLESTICK LAYER
// ============================================================================
pub struct CandlestickLayer;

impl PlotLayer for CandlestickLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for p in &ctx.config.price.data {
            let color = p.get_type().color();
            let x = p.x as f64;

            // 1. Wick
            if p.high() > p.low() {
                draw_wick_line(plot_ui, ctx, x, p.high(), p.low(), color);
            }

            // 2. Body
            let (body_bot, body_top_raw) = p.body_range();
            // Doji check
            let body_top = if (body_top_raw - body_bot).abs() < f64::EPSILON {
                body_bot + (ctx.y_bounds.1 - ctx.y_bounds.0) * 0.001
            } else {
                body_top_raw
            };
            draw_body_rect(plot_ui, ctx, x, body_top, body_bot, color);
        }
    }
}

#[inline]
fn draw_wick_line(ui: &mut PlotUi, ctx: &LayerContext, x: f64, top: f64, bottom: f64, color: Color32) {
    ui.line(
        Line::new("", PlotPoints::new(vec![[x, bottom], [x, top]]))
            .color(color)
            .width(ctx.config.style.candle_wick_width),
    );
}

#[inline]
fn draw_body_rect(ui: &mut PlotUi, ctx: &LayerContext, x: f64, top: f64, bottom: f64, color: Color32) {
    let half_w = ctx.config.style.candle_width_pct / 2.0;
    let pts = vec![
        [x - half_w, bottom],
        [x + half_w, bottom],
        [x + half_w, top],
        [x - half_w, top],
    ];

    // No border stroke: thin candles smear otherwise
    ui.polygon(
        Polygon::new("", PlotPoints::new(pts))
            .fill_color(color)
            .stroke(Stroke::NONE),
    );
}

// ============================================================================
// 3. TREND LINE LAYER (close prices)
// ============================================================================
pub struct TrendLineLayer;

impl PlotLayer for TrendLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let trend = &ctx.config.trend;
        if trend.data.len() < 2 {
            return;
        }

        let points: PlotPoints = trend.data.iter().map(|t| [t.x as f64, t.y]).collect();

        plot_ui.line(
            Line::new(&trend.name, points)
                .color(ctx.config.style.trend_line_color)
                .width(ctx.config.style.trend_line_width),
        );
    }
}

// ============================================================================
// 4. HOVER TOOLTIP LAYER
// ============================================================================
pub struct TooltipLayer;

impl PlotLayer for TooltipLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let Some(pointer) = plot_ui.pointer_coordinate() else {
            return;
        };
        let Some(idx) = resolve_index(pointer.x, ctx.config.len()) else {
            return;
        };
        let Some(content) = (ctx.config.tooltip)(PRICE_SERIES, idx) else {
            return;
        };

        let tooltip_layer = LayerId::new(Tooltip, Id::new("candle_tooltips"));

        #[allow(deprecated)]
        show_tooltip_at_pointer(
            plot_ui.ctx(),
            tooltip_layer,
            Id::new(("candle_tooltip", idx)),
            |ui: &mut Ui| render_tooltip(ui, &content, ctx),
        );
    }
}

fn render_tooltip(ui: &mut Ui, content: &TooltipContent, ctx: &LayerContext) {
    let style = ctx.config.style;
    let muted = style.tooltip_text_color;

    ui.label(RichText::new(&content.date).strong());
    ui.separator();
    ui.label(RichText::new(format!("{}: {}", UI_TEXT.tt_open, content.open)).color(muted));
    // Close carries the candle direction colour
    ui.label(
        RichText::new(format!("{}: {}", UI_TEXT.tt_close, content.close))
            .color(content.direction.color()),
    );
    ui.label(RichText::new(format!("{}: {}", UI_TEXT.tt_high, content.high)).color(muted));
    ui.label(RichText::new(format!("{}: {}", UI_TEXT.tt_low, content.low)).color(muted));
    if let Some(volume) = &content.volume {
        ui.label(RichText::new(format!("{}: {}", UI_TEXT.tt_volume, volume)).color(muted));
    }

    let arrow = match content.direction {
        CandleType::Bullish => "▲",
        CandleType::Bearish => "▼",
    };
    ui.label(
        RichText::new(format!("{} {} {}", UI_TEXT.tt_change, arrow, content.change))
            .strong()
            .color(content.change_color),
    );
}
