use eframe::egui::{CentralPanel, Context, RichText, TopBottomPanel};
use eframe::Frame;

use crate::Cli;
use crate::chart::{ChartConfig, assemble_chart, select_granularity, zoom_level};
use crate::config::{ChartSettings, PLOT_CONFIG};
use crate::data::{DemoSource, RecordSource};
use crate::domain::OhlcRecord;
use crate::ui::{PlotView, UI_CONFIG, UI_TEXT, setup_custom_visuals};

#[cfg(not(target_arch = "wasm32"))]
use crate::data::JsonFileSource;

pub struct ChartApp {
    settings: ChartSettings,
    config: ChartConfig,
    plot_view: PlotView,
    source_name: String,
    load_error: Option<String>,
}

impl ChartApp {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let settings = args.chart_settings().unwrap_or_else(|e| {
            log::error!("Ignoring chart options: {:#}", e);
            ChartSettings::default()
        });

        let source = Self::select_source(&args);
        let source_name = source.describe();
        let (records, load_error) = match source.load() {
            Ok(records) => (records, None),
            Err(e) => {
                log::error!("Failed to load records from {}: {:#}", source_name, e);
                (Vec::new(), Some(format!("{:#}", e)))
            }
        };

        Self::from_records(settings, &records, source_name, load_error)
    }

    fn from_records(
        settings: ChartSettings,
        records: &[OhlcRecord],
        source_name: String,
        load_error: Option<String>,
    ) -> Self {
        let config = assemble_chart(records, &settings);
        Self {
            settings,
            config,
            plot_view: PlotView::new(),
            source_name,
            load_error,
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn select_source(args: &Cli) -> Box<dyn RecordSource> {
        match &args.data {
            Some(path) => Box::new(JsonFileSource::new(path)),
            None => Box::new(DemoSource),
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn select_source(_args: &Cli) -> Box<dyn RecordSource> {
        Box::new(DemoSource)
    }

    /// Zoom level and label granularity for the last reported viewport.
    fn status_text(&self) -> String {
        let zoom = self
            .plot_view
            .last_viewport()
            .and_then(|vp| zoom_level(vp, self.config.len()));

        match zoom {
            Some(z) => format!(
                "{}: {}   {}: {:.0}%   {}: {}",
                UI_TEXT.sb_candles,
                self.config.len(),
                UI_TEXT.sb_zoom,
                z * 100.0,
                UI_TEXT.sb_labels,
                select_granularity(z, &self.settings.zoom)
            ),
            None => format!("{}: {}", UI_TEXT.sb_candles, self.config.len()),
        }
    }

    fn render_title_bar(&self, ctx: &Context) {
        TopBottomPanel::top("title_bar")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&self.config.title)
                            .size(PLOT_CONFIG.title_size)
                            .strong()
                            .color(PLOT_CONFIG.title_color),
                    );
                    ui.separator();
                    ui.label(RichText::new(&self.source_name).small());
                });
            });
    }

    fn render_status_bar(&self, ctx: &Context) {
        TopBottomPanel::bottom("status_bar")
            .frame(UI_CONFIG.bottom_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(self.status_text())
                            .size(PLOT_CONFIG.axis_font_size)
                            .color(PLOT_CONFIG.axis_text_color),
                    );
                    if let Some(err) = &self.load_error {
                        ui.separator();
                        ui.label(RichText::new(err).color(PLOT_CONFIG.candle_bearish_color));
                    }
                });
            });
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.render_title_bar(ctx);
        self.render_status_bar(ctx);

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                self.plot_view.show(ui, &self.config);
            });
    }
}
