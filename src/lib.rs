// Core modules
pub mod chart;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use chart::{ChartConfig, Viewport, assemble_chart};
pub use config::ChartSettings;
pub use domain::OhlcRecord;
pub use ui::ChartApp;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::{CHART_DEFAULTS, ZoomThresholds};

// CLI argument parsing
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file holding an array of OHLC records (bundled demo data if omitted)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// How many of the most recent candles get a Bull/Bear annotation
    #[arg(long, default_value_t = CHART_DEFAULTS.annotation_window)]
    pub annotate_last: usize,

    /// Zoom bands for axis labels: MONTH DAY TIME (strictly descending)
    #[arg(long, num_args = 3, value_names = ["MONTH", "DAY", "TIME"])]
    pub zoom_thresholds: Option<Vec<f64>>,

    /// Chart title
    #[arg(long)]
    pub title: Option<String>,
}

impl Cli {
    /// Arguments used when there is no command line (wasm).
    pub fn defaults() -> Self {
        Self {
            data: None,
            annotate_last: CHART_DEFAULTS.annotation_window,
            zoom_thresholds: None,
            title: None,
        }
    }

    pub fn chart_settings(&self) -> Result<ChartSettings> {
        let mut settings = ChartSettings {
            annotation_window: self.annotate_last,
            ..ChartSettings::default()
        };

        if let Some(t) = &self.zoom_thresholds {
            // clap guarantees exactly three values
            settings.zoom = ZoomThresholds::new(t[0], t[1], t[2])?;
        }
        if let Some(title) = &self.title {
            settings.title = title.clone();
        }

        Ok(settings)
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> ChartApp {
    ChartApp::new(cc, args)
}
