// Domain models shared between the data layer, analysis, and the UI
pub mod display;
pub mod series;

// Re-export commonly used types
pub use display::{DisplayOptions, TraceKind, TraceSpec};
pub use series::{InstrumentSeries, Observation};
