use std::sync::LazyLock;

pub struct UiText {
    // --- PLOT LABELS ---
    pub plot_id: String,
    pub plot_x_axis: String,
    pub plot_y_axis: String,
    pub series_price: String,
    pub series_trend: String,

    // --- TOOLTIP ---
    pub tt_open: String,
    pub tt_high: String,
    pub tt_low: String,
    pub tt_close: String,
    pub tt_change: String,
    pub tt_volume: String,
    pub tt_not_available: String,

    // --- STATUS BAR ---
    pub sb_candles: String,
    pub sb_zoom: String,
    pub sb_labels: String,

    // --- ERRORS ---
    pub error_no_data: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    plot_id: "candle_chart".to_string(),
    plot_x_axis: "Time".to_string(),
    plot_y_axis: "Price".to_string(),
    series_price: "Price".to_string(),
    series_trend: "Trend".to_string(),

    tt_open: "Open".to_string(),
    tt_high: "High".to_string(),
    tt_low: "Low".to_string(),
    tt_close: "Close".to_string(),
    tt_change: "Change".to_string(),
    tt_volume: "Volume".to_string(),
    tt_not_available: "N/A".to_string(),

    sb_candles: "Candles".to_string(),
    sb_zoom: "Zoom".to_string(),
    sb_labels: "Labels".to_string(),

    error_no_data: "No chart data available".to_string(),
});
