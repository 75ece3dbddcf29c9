//! Configuration module for the price board application.

pub mod analysis;
pub mod persistence;
pub mod plot;

// Re-export commonly used items
pub use analysis::{
    DATE_FORMAT, MOVING_AVG_WINDOW_DEFAULT, MOVING_AVG_WINDOW_MAX, MOVING_AVG_WINDOW_MIN,
};
pub use persistence::{APP_STATE_PATH, DEFAULT_DATA_PATH};
