// Loading and sanitizing the instrument document
pub mod document;
pub mod loader;

use anyhow::Result;

use crate::analysis::sanitize;
use crate::data::document::RawDocument;
use crate::models::InstrumentSeries;

// Re-export commonly used types
pub use document::{RawObservation, parse_document};
pub use loader::{EmbeddedDemoDocument, LoadSeriesDocument, default_providers, get_series_document};

/// The sanitized collection of instrument series produced by one load.
/// Immutable once built; the UI only reads from it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InstrumentSet {
    pub series: Vec<InstrumentSeries>,
}

impl InstrumentSet {
    /// Sanitizes every series of a raw document. Per-entry date failures are
    /// collected into the returned warning list; they never fail the load.
    pub fn from_document(document: RawDocument) -> (Self, Vec<String>) {
        let mut series = Vec::with_capacity(document.len());
        let mut warnings = Vec::new();

        for (name, raw_entries) in document {
            let (observations, mut series_warnings) = sanitize(&raw_entries);
            warnings.append(&mut series_warnings);
            series.push(InstrumentSeries::from_observations(name, observations));
        }

        (InstrumentSet { series }, warnings)
    }

    pub fn instrument_names(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn total_observations(&self) -> usize {
        self.series.iter().map(InstrumentSeries::len).sum()
    }
}

/// Everything a completed load hands to the UI in one piece.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub set: InstrumentSet,
    pub warnings: Vec<String>,
    /// Signature of the provider that produced the document
    pub source: &'static str,
}

/// Runs the full load pipeline: provider chain, JSON parse, sanitization.
pub fn load_instrument_set(providers: &[Box<dyn LoadSeriesDocument>]) -> Result<LoadOutcome> {
    let (document, source) = get_series_document(providers)?;
    let (set, warnings) = InstrumentSet::from_document(document);

    log::info!(
        "Loaded {} instruments ({} observations) from: {}",
        set.series.len(),
        set.total_observations(),
        source
    );
    if !warnings.is_empty() {
        log::warn!("{} observations dropped during sanitization", warnings.len());
    }

    Ok(LoadOutcome {
        set,
        warnings,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_document_sanitizes_each_series() {
        let document = parse_document(
            r#"{
                "Inst1": [
                    {"date": "2024-01-02", "price": 20.0},
                    {"date": "invalid", "price": 99.0},
                    {"date": "2024-01-01", "price": 10.0}
                ],
                "Inst2": [
                    {"date": "2024-01-01", "price": 5.0}
                ]
            }"#,
        )
        .unwrap();

        let (set, warnings) = InstrumentSet::from_document(document);

        assert_eq!(set.instrument_names(), vec!["Inst1", "Inst2"]);
        assert_eq!(set.series[0].len(), 2, "Bad entry must be dropped");
        assert_eq!(set.series[0].prices, vec![10.0, 20.0], "Sorted by date");
        assert_eq!(set.total_observations(), 3);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("invalid"));
    }

    #[test]
    fn test_load_instrument_set_via_embedded_demo() {
        let providers: Vec<Box<dyn LoadSeriesDocument>> = vec![Box::new(EmbeddedDemoDocument)];

        let outcome = load_instrument_set(&providers).unwrap();

        assert_eq!(outcome.source, "Embedded demo document");
        assert_eq!(outcome.set.series.len(), 2);
        assert!(outcome.warnings.is_empty(), "Demo document is clean");
        for series in &outcome.set.series {
            for pair in series.dates.windows(2) {
                assert!(pair[0] <= pair[1], "Every loaded series is date-sorted");
            }
        }
    }
}
