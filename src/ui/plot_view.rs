use chrono::NaiveDate;
use eframe::egui::Ui;
use egui_plot::{
    AxisHints, Corner, HPlacement, Legend, Line, LineStyle, MarkerShape, Plot, PlotPoints, Points,
};

use crate::config::plot::PLOT_CONFIG;
use crate::models::{TraceKind, TraceSpec};
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::format_price;

/// Draws the composed traces. Traces arrive one per instrument, in set order,
/// so the trace index doubles as the instrument's stable color slot in both
/// display modes.
pub fn show_board_plot(ui: &mut Ui, traces: &[TraceSpec]) {
    let legend = Legend::default().position(Corner::RightTop);

    Plot::new("board_plot")
        .legend(legend)
        .custom_x_axes(vec![create_x_axis()])
        .custom_y_axes(vec![create_y_axis()])
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for (slot, trace) in traces.iter().enumerate() {
                let color =
                    PLOT_CONFIG.instrument_colors[slot % PLOT_CONFIG.instrument_colors.len()];

                match trace.kind {
                    TraceKind::Price => {
                        plot_ui.line(
                            Line::new(&trace.label, PlotPoints::new(trace.points.clone()))
                                .color(color)
                                .width(PLOT_CONFIG.price_line_width),
                        );
                        plot_ui.points(
                            Points::new(&trace.label, PlotPoints::new(trace.points.clone()))
                                .color(color)
                                .radius(PLOT_CONFIG.marker_radius)
                                .shape(MarkerShape::Circle)
                                .filled(true),
                        );
                    }
                    TraceKind::MovingAverage { .. } => {
                        plot_ui.line(
                            Line::new(&trace.label, PlotPoints::new(trace.points.clone()))
                                .color(color)
                                .width(PLOT_CONFIG.average_line_width)
                                .style(LineStyle::Dashed {
                                    length: PLOT_CONFIG.average_dash_length,
                                }),
                        );
                    }
                }
            }
        });
}

fn create_x_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis)
        .formatter(|grid_mark, _range| {
            // Reverses the days-from-CE encoding used by the composer
            NaiveDate::from_num_days_from_ce_opt(grid_mark.value.round() as i32)
                .map(|date| date.format("%b %d").to_string())
                .unwrap_or_default()
        })
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis)
        .formatter(|grid_mark, _range| format_price(grid_mark.value))
        .placement(HPlacement::Left)
}
