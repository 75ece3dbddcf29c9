use eframe::egui::{
    CentralPanel, Color32, Context, Frame, Key, Margin, RichText, SidePanel, TopBottomPanel, Ui,
};

use crate::ui::app::{LoadState, PriceBoardApp};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::panels::{ControlsEvent, ControlsPanel, Panel};
use crate::ui::plot_view::show_board_plot;
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::spaced_separator;

impl PriceBoardApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new().fill(UI_CONFIG.colors.side_panel);
        SidePanel::left("left_panel")
            .min_width(180.0)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                let events = self.controls_panel(ui);

                for event in events {
                    match event {
                        ControlsEvent::ShowMovingAverage(show) => {
                            self.display.show_moving_average = show;
                        }
                        ControlsEvent::WindowSize(window_size) => {
                            self.set_window_size(window_size);
                        }
                    }
                }

                spaced_separator(ui);
                if let Some(source) = self.data_source {
                    ui.label_subdued(format!("Source: {}", source));
                }
                ui.label_subdued(UI_TEXT.shortcut_hint);
            });
    }

    fn controls_panel(&mut self, ui: &mut Ui) -> Vec<ControlsEvent> {
        let mut panel = ControlsPanel::new(self.display);
        panel.render(ui)
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ui.add_space(10.0);

                let mut retry = false;
                match &self.load_state {
                    LoadState::Ready(set) => {
                        ui.label_header(self.mode_heading());
                        match self.board_traces(set) {
                            Ok(traces) => show_board_plot(ui, &traces),
                            Err(error) => ui.label_error(error.to_string()),
                        }
                    }
                    LoadState::Loading => {
                        ui.vertical_centered(|ui| {
                            ui.add_space(40.0);
                            ui.spinner();
                            ui.add_space(12.0);
                            ui.heading(UI_TEXT.loading_heading);
                            ui.add_space(6.0);
                            ui.label(
                                RichText::new(UI_TEXT.loading_submessage)
                                    .color(Color32::from_gray(190)),
                            );
                        });
                    }
                    LoadState::Failed(error) => {
                        let message = error.to_string();
                        ui.vertical_centered(|ui| {
                            ui.add_space(40.0);
                            ui.heading(UI_TEXT.error_heading);
                            ui.add_space(10.0);
                            ui.label(message);
                            ui.add_space(20.0);
                            ui.label(UI_TEXT.error_submessage);
                            ui.add_space(10.0);
                            if ui.button(UI_TEXT.button_retry).clicked() {
                                retry = true;
                            }
                        });
                    }
                }

                if retry {
                    self.start_load();
                }
            });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    // 1. Display mode
                    if self.display.show_moving_average {
                        ui.metric(
                            UI_TEXT.status_view_label,
                            &format!("Moving average ({} days)", self.display.window_size),
                            Color32::from_rgb(100, 200, 255),
                        );
                    } else {
                        ui.metric(
                            UI_TEXT.status_view_label,
                            UI_TEXT.status_mode_raw,
                            Color32::from_rgb(100, 200, 100),
                        );
                    }
                    ui.separator();

                    // 2. Data shape
                    if let LoadState::Ready(set) = &self.load_state {
                        ui.label_subdued(format!("📊 {} instruments", set.series.len()));
                        ui.label_subdued(format!("| {} observations", set.total_observations()));
                        ui.separator();
                    }

                    // 3. Sanitization result
                    if self.dropped_observations > 0 {
                        ui.label_warning(format!("⚠ {} entries dropped", self.dropped_observations));
                        ui.separator();
                    }

                    // 4. Load in flight
                    if self.is_loading() {
                        ui.label_warning("⚙ Loading…");
                    }
                });
            });
    }

    pub(super) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(Key::M) && matches!(self.load_state, LoadState::Ready(_)) {
                self.toggle_moving_average();
            }

            if i.key_pressed(Key::Escape) && self.toast.is_active() {
                self.toast.dismiss();
            }
        });
    }
}
