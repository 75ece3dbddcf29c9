use eframe::egui::{Align2, Area, Color32, Context, Frame, Id, Order, RichText, vec2};
use std::time::Duration;

use crate::ui::config::UI_CONFIG;
use crate::ui::ui_text::UI_TEXT;
use crate::utils::app_time::{AppInstant, now};

struct ActiveToast {
    message: String,
    shown_at: AppInstant,
}

/// The transient warning notification, pinned to the bottom-right corner.
/// Auto-expires after `UI_CONFIG.toast_seconds`, or sooner on explicit
/// dismissal. Holds one message at a time; a new `show` replaces it.
#[derive(Default)]
pub struct WarningToast {
    current: Option<ActiveToast>,
}

impl WarningToast {
    pub fn show(&mut self, message: impl Into<String>) {
        self.current = Some(ActiveToast {
            message: message.into(),
            shown_at: now(),
        });
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|toast| toast.message.as_str())
    }

    pub fn render(&mut self, ctx: &Context) {
        let lifetime = Duration::from_secs(UI_CONFIG.toast_seconds);
        if let Some(toast) = &self.current {
            if toast.shown_at.elapsed() >= lifetime {
                self.current = None;
            }
        }
        let Some(toast) = &self.current else {
            return;
        };

        let mut dismissed = false;
        Area::new(Id::new("warning_toast"))
            .anchor(Align2::RIGHT_BOTTOM, vec2(-16.0, -16.0))
            .order(Order::Foreground)
            .show(ctx, |ui| {
                Frame::window(&ctx.style())
                    .fill(UI_CONFIG.colors.toast_background)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(UI_TEXT.toast_title)
                                    .strong()
                                    .color(Color32::WHITE),
                            );
                            if ui.small_button("✖").clicked() {
                                dismissed = true;
                            }
                        });
                        ui.separator();
                        for line in toast.message.lines() {
                            ui.label(RichText::new(line).color(Color32::WHITE));
                        }
                    });
            });

        if dismissed {
            self.current = None;
            return;
        }

        // Wake up again soon so the toast disappears without user input
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
