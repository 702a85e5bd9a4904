mod app;
mod plot_layers;
mod plot_view;
mod styles;
mod ui_config;
mod ui_text;

pub use app::ChartApp;
pub use plot_view::PlotView;

pub use styles::setup_custom_visuals;
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
