//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    // One color per instrument slot, in document order. Color identity is
    // stable between the raw and smoothed views.
    pub instrument_colors: &'static [Color32],
    /// Radius of the per-observation markers in the raw price view
    pub marker_radius: f32,
    /// Width of raw price lines
    pub price_line_width: f32,
    /// Width of moving-average lines
    pub average_line_width: f32,
    /// Dash length for moving-average lines
    pub average_dash_length: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    instrument_colors: &[
        Color32::from_rgb(23, 190, 207),  // Teal
        Color32::from_rgb(127, 127, 127), // Gray
        Color32::from_rgb(255, 165, 0),   // Orange, in case a document ships a third series
    ],
    marker_radius: 2.0,
    price_line_width: 1.5,
    average_line_width: 2.0,
    average_dash_length: 8.0,
};
