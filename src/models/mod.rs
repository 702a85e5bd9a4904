mod annotation;
mod normalize;
mod series;

pub use annotation::{Annotation, build_annotations};
pub use normalize::normalize_records;
pub use series::{ChartSeries, PlotPoint, TrendPoint, build_series, price_bounds};
