//! Plot visualization configuration

use eframe::egui::Color32;

use crate::domain::CandleType;

pub struct PlotConfig {
    // --- CANDLESTICKS ---
    pub candle_bullish_color: Color32,
    pub candle_bearish_color: Color32,
    pub candle_width_pct: f64,  // 0.0 to 1.0 (relative to one index step)
    pub candle_wick_width: f32, // Pixels

    // --- TREND LINE ---
    pub trend_line_color: Color32,
    pub trend_line_width: f32,

    // --- ANNOTATIONS ---
    /// Alpha of the translucent stripe behind an annotated candle (0.0 - 1.0)
    pub annotation_fill_opacity: f32,
    pub annotation_border_width: f32,
    pub annotation_label_size: f32,

    pub plot_y_padding_pct: f64, // Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)
    pub plot_x_padding_pct: f64,

    // --- CHROME ---
    pub background_color: Color32,
    pub title_color: Color32,
    pub title_size: f32,
    pub axis_text_color: Color32,
    pub axis_font_size: f32,
    /// Target number of labelled ticks along the x axis
    pub x_axis_target_ticks: f64,

    // --- TOOLTIP ---
    pub tooltip_text_color: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    candle_bullish_color: Color32::from_rgb(38, 166, 154), // #26a69a teal
    candle_bearish_color: Color32::from_rgb(239, 83, 80),  // #ef5350 red
    candle_width_pct: 0.8, // 80% width leaves a small gap between candles
    candle_wick_width: 1.0,

    trend_line_color: Color32::from_rgb(30, 136, 229),
    trend_line_width: 1.5,

    annotation_fill_opacity: 0.1,
    annotation_border_width: 1.0,
    annotation_label_size: 10.0,

    plot_y_padding_pct: 0.05,
    // E.g. if viewing 100 candles, this adds 2 "empty" candles of space on each side.
    plot_x_padding_pct: 0.02,

    background_color: Color32::WHITE,
    title_color: Color32::from_rgb(51, 51, 51), // #333
    title_size: 16.0,
    axis_text_color: Color32::from_rgb(102, 102, 102), // #666
    axis_font_size: 12.0,
    x_axis_target_ticks: 10.0,

    tooltip_text_color: Color32::from_rgb(75, 85, 99), // gray-600
};

/// Candle direction to palette colour.
pub trait DirectionColor {
    fn color(&self) -> Color32;
    fn fill_color(&self) -> Color32;
}

impl DirectionColor for CandleType {
    fn color(&self) -> Color32 {
        match self {
            Self::Bullish => PLOT_CONFIG.candle_bullish_color,
            Self::Bearish => PLOT_CONFIG.candle_bearish_color,
        }
    }

    fn fill_color(&self) -> Color32 {
        apply_opacity(self.color(), PLOT_CONFIG.annotation_fill_opacity)
    }
}

pub fn apply_opacity(color: Color32, factor: f32) -> Color32 {
    color.linear_multiply(factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_is_translucent_variant_of_border() {
        for dir in [CandleType::Bullish, CandleType::Bearish] {
            let fill = dir.fill_color();
            assert!(fill.a() < dir.color().a());
            assert_ne!(fill, Color32::TRANSPARENT);
        }
    }

    #[test]
    fn test_direction_colors_follow_palette() {
        assert_eq!(CandleType::Bullish.color(), PLOT_CONFIG.candle_bullish_color);
        assert_eq!(CandleType::Bearish.color(), PLOT_CONFIG.candle_bearish_color);
    }
}
