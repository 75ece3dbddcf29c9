use serde::{Deserialize, Serialize};

use crate::config::MOVING_AVG_WINDOW_DEFAULT;

/// What the user wants to see: raw prices or the smoothed view.
///
/// Owned by the app shell and persisted between runs. All mutation goes
/// through the control-panel events so the analysis code stays pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    pub show_moving_average: bool,
    pub window_size: u32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            show_moving_average: false,
            window_size: MOVING_AVG_WINDOW_DEFAULT,
        }
    }
}

/// Which family a renderable trace belongs to. The plot view picks line
/// styling from this; the color comes from the instrument slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    /// Raw prices, drawn as a line with per-observation markers
    Price,
    /// Trailing mean, drawn as a dashed line
    MovingAverage { window_size: u32 },
}

/// One renderable series descriptor, ready for the chart widget.
///
/// `points` are `[x, y]` pairs where x is the date as days-from-CE, the same
/// encoding the plot's x-axis formatter reverses.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceSpec {
    pub instrument: String,
    pub label: String,
    pub points: Vec<[f64; 2]>,
    pub kind: TraceKind,
}
