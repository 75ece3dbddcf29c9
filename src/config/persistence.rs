//! File locations for app state and the input document.

/// Where eframe persists UI state (display mode, window size) between runs.
pub const APP_STATE_PATH: &str = "app_state.json";

/// Default location of the instrument document, relative to the working directory.
/// Overridable with `--data-path`.
pub const DEFAULT_DATA_PATH: &str = "data/input_data.json";
