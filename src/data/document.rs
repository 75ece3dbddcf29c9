use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry exactly as it appears in the input document. The date stays a
/// string here; sanitization decides whether it parses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RawObservation {
    pub date: String,
    pub price: f64,
}

/// The whole input document: instrument name -> raw entries.
///
/// A BTreeMap keeps instrument order deterministic (and therefore color
/// assignment stable) regardless of key order in the JSON file.
pub type RawDocument = BTreeMap<String, Vec<RawObservation>>;

pub fn parse_document(text: &str) -> Result<RawDocument> {
    serde_json::from_str(text).context("Failed to parse instrument document as JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_two_instruments() {
        let text = r#"{
            "Inst2": [{"date": "2024-01-01", "price": 5.5}],
            "Inst1": [
                {"date": "2024-01-01", "price": 10.0},
                {"date": "2024-01-02", "price": 20.0}
            ]
        }"#;

        let document = parse_document(text).unwrap();

        // BTreeMap iteration is name-sorted, independent of JSON key order
        let names: Vec<_> = document.keys().cloned().collect();
        assert_eq!(names, vec!["Inst1", "Inst2"]);
        assert_eq!(document["Inst1"].len(), 2);
        assert_eq!(document["Inst1"][1].price, 20.0);
    }

    #[test]
    fn test_parse_document_rejects_malformed_json() {
        assert!(parse_document("{\"Inst1\": [{\"date\": 3}]}").is_err());
        assert!(parse_document("not json").is_err());
    }
}
