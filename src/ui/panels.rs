use eframe::egui::{DragValue, Ui};

use crate::config::{MOVING_AVG_WINDOW_MAX, MOVING_AVG_WINDOW_MIN};
use crate::models::DisplayOptions;
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::{colored_subsection_heading, section_heading};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Debug)]
pub enum ControlsEvent {
    ShowMovingAverage(bool),
    WindowSize(u32),
}

/// Panel for the display controls: the raw/smoothed toggle and the
/// moving-average window input.
pub struct ControlsPanel {
    display: DisplayOptions,
}

impl ControlsPanel {
    pub fn new(display: DisplayOptions) -> Self {
        Self { display }
    }

    fn render_toggle_button(&mut self, ui: &mut Ui) -> Option<bool> {
        let label = if self.display.show_moving_average {
            UI_TEXT.button_hide_moving_average
        } else {
            UI_TEXT.button_show_moving_average
        };

        if ui.button(label).clicked() {
            return Some(!self.display.show_moving_average);
        }
        None
    }

    fn render_window_size_input(&mut self, ui: &mut Ui) -> Option<u32> {
        let mut changed = None;

        ui.add_space(5.0);
        ui.label(colored_subsection_heading(UI_TEXT.window_size_heading));

        let mut window_size = self.display.window_size;
        let response = ui.add(
            DragValue::new(&mut window_size)
                .range(MOVING_AVG_WINDOW_MIN..=MOVING_AVG_WINDOW_MAX)
                .suffix(" days"),
        );

        if response.changed() {
            self.display.window_size = window_size;
            changed = Some(window_size);
        }

        let helper_text = format!(
            "{}{}{}",
            UI_TEXT.window_size_helper_prefix, window_size, UI_TEXT.window_size_helper_suffix
        );
        ui.label_subdued(helper_text);

        changed
    }
}

impl Panel for ControlsPanel {
    type Event = ControlsEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<ControlsEvent> {
        let mut events = Vec::new();

        section_heading(ui, UI_TEXT.display_heading);

        if let Some(show) = self.render_toggle_button(ui) {
            events.push(ControlsEvent::ShowMovingAverage(show));
        }

        if let Some(window_size) = self.render_window_size_input(ui) {
            events.push(ControlsEvent::WindowSize(window_size));
        }

        events
    }
}
