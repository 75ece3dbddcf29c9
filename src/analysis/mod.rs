// The data-preparation pipeline: everything here is pure and testable
// without the UI.
pub mod compose;
pub mod moving_average;
pub mod sanitize;

pub use compose::compose_traces;
pub use moving_average::moving_average;
pub use sanitize::{parse_observation_date, sanitize};
