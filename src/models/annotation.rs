use eframe::egui::Color32;

use crate::domain::CandleType;
use crate::models::PlotPoint;
use crate::config::DirectionColor;

/// Highlighted stripe over one of the most recent candles.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub x: usize,
    /// Exclusive end of the stripe (one candle wide)
    pub x2: usize,
    pub direction: CandleType,
    pub border_color: Color32,
    pub fill_color: Color32,
    pub label: String,
}

/// One annotation for each of the last `min(window, n)` points, in ascending order.
pub fn build_annotations(points: &[PlotPoint], window: usize) -> Vec<Annotation> {
    let start = points.len().saturating_sub(window);

    points[start..]
        .iter()
        .map(|p| {
            let direction = p.get_type();
            Annotation {
                x: p.x,
                x2: p.x + 1,
                direction,
                border_color: direction.color(),
                fill_color: direction.fill_color(),
                label: direction.to_string(),
            }
        })
        .collect()
}
