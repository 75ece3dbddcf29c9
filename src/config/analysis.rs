//! Data preparation parameters (date parsing and smoothing).

/// Textual date format accepted in the input document.
/// Entries that fail this (and the RFC 3339 fallback) are dropped with a warning.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive bounds for the moving-average window, enforced at the UI boundary.
pub const MOVING_AVG_WINDOW_MIN: u32 = 1;
pub const MOVING_AVG_WINDOW_MAX: u32 = 50;

/// Window size used until the user picks their own.
pub const MOVING_AVG_WINDOW_DEFAULT: u32 = 10;
