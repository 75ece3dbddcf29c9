use eframe::{Frame, egui};
use poll_promise::Promise;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::analysis::{compose_traces, moving_average};
use crate::config::{MOVING_AVG_WINDOW_MAX, MOVING_AVG_WINDOW_MIN};
use crate::data::InstrumentSet;
use crate::models::{DisplayOptions, TraceSpec};
use crate::ui::app_async::AsyncLoadResult;
use crate::ui::toast::WarningToast;
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::setup_custom_visuals;

/// Error types for application operations
#[derive(Debug, Clone)]
pub enum AppError {
    /// Loading or parsing the instrument document failed
    LoadFailed(String),
    /// The moving-average window is outside the accepted range
    InvalidWindowSize(u32),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::LoadFailed(msg) => write!(f, "Failed to load data: {}", msg),
            AppError::InvalidWindowSize(size) => {
                write!(f, "Invalid moving-average window: {}", size)
            }
        }
    }
}

impl std::error::Error for AppError {}

/// Lifecycle of the one-time document load.
///
/// A failed load is a real state with a Retry affordance, not a silent
/// forever-Loading.
#[derive(Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(InstrumentSet),
    Failed(AppError),
}

#[derive(Default, Deserialize, Serialize)]
pub struct PriceBoardApp {
    // UI state (persisted between runs)
    #[serde(default)]
    pub(super) display: DisplayOptions,

    // Runtime-only state - skipped by serde
    #[serde(skip)]
    pub(super) load_state: LoadState,
    #[serde(skip)]
    pub(super) load_promise: Option<Promise<AsyncLoadResult>>,
    #[serde(skip)]
    pub(super) data_path: Option<PathBuf>,
    #[serde(skip)]
    pub(super) data_source: Option<&'static str>,
    #[serde(skip)]
    pub(super) dropped_observations: usize,
    #[serde(skip)]
    pub(super) toast: WarningToast,
}

impl PriceBoardApp {
    pub fn new(cc: &eframe::CreationContext, data_path: Option<PathBuf>) -> Self {
        let mut app: PriceBoardApp = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        app.data_path = data_path;
        app.start_load();
        app
    }

    /// Recomputes the renderable traces for the current options. Runs every
    /// frame while data is ready; the series are small enough that caching
    /// would be pure overhead.
    pub(super) fn board_traces(&self, set: &InstrumentSet) -> Result<Vec<TraceSpec>, AppError> {
        let averages = if self.display.show_moving_average {
            set.series
                .iter()
                .map(|series| moving_average(&series.prices, self.display.window_size))
                .collect::<anyhow::Result<Vec<_>>>()
                .map_err(|_| AppError::InvalidWindowSize(self.display.window_size))?
        } else {
            Vec::new()
        };

        Ok(compose_traces(set, &averages, &self.display))
    }

    pub(super) fn mode_heading(&self) -> &'static str {
        if self.display.show_moving_average {
            UI_TEXT.heading_moving_average
        } else {
            UI_TEXT.heading_price
        }
    }

    pub(super) fn toggle_moving_average(&mut self) {
        self.display.show_moving_average = !self.display.show_moving_average;
    }

    /// Input-boundary policy: out-of-range window sizes are clamped here so
    /// the calculator only ever sees valid values from the UI.
    pub(super) fn set_window_size(&mut self, window_size: u32) {
        self.display.window_size = window_size.clamp(MOVING_AVG_WINDOW_MIN, MOVING_AVG_WINDOW_MAX);
    }
}

impl eframe::App for PriceBoardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Drop any in-flight load so the promise sender never outlives us
        if let Some(promise) = self.load_promise.take() {
            drop(promise);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        // Poll the one-time document load
        self.poll_load(ctx);

        self.handle_global_shortcuts(ctx);

        self.render_side_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);

        self.toast.render(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InstrumentSeries, Observation, TraceKind};

    fn ready_app(set: InstrumentSet) -> PriceBoardApp {
        PriceBoardApp {
            load_state: LoadState::Ready(set),
            ..Default::default()
        }
    }

    fn small_set() -> InstrumentSet {
        let obs = |date: &str, price: f64| Observation {
            date: date.parse().unwrap(),
            price,
        };
        InstrumentSet {
            series: vec![InstrumentSeries::from_observations(
                "Inst1",
                vec![
                    obs("2024-01-01", 10.0),
                    obs("2024-01-02", 20.0),
                    obs("2024-01-03", 30.0),
                ],
            )],
        }
    }

    #[test]
    fn test_board_traces_follow_display_mode() {
        let set = small_set();
        let mut app = ready_app(set.clone());

        let raw = app.board_traces(&set).unwrap();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].kind, TraceKind::Price);

        app.toggle_moving_average();
        app.set_window_size(2);
        let smoothed = app.board_traces(&set).unwrap();
        assert_eq!(smoothed.len(), 1);
        assert_eq!(smoothed[0].kind, TraceKind::MovingAverage { window_size: 2 });
        // [10, 20, 30] with window 2 -> [10, 15, 25]
        let ys: Vec<f64> = smoothed[0].points.iter().map(|p| p[1]).collect();
        assert_eq!(ys, vec![10.0, 15.0, 25.0]);
    }

    #[test]
    fn test_window_size_is_clamped_at_the_boundary() {
        let mut app = PriceBoardApp::default();

        app.set_window_size(0);
        assert_eq!(app.display.window_size, MOVING_AVG_WINDOW_MIN);

        app.set_window_size(500);
        assert_eq!(app.display.window_size, MOVING_AVG_WINDOW_MAX);
    }
}
