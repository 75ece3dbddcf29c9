use anyhow::{Context, Result, anyhow};

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use crate::data::document::{RawDocument, parse_document};

#[cfg(not(target_arch = "wasm32"))]
use crate::config::DEFAULT_DATA_PATH;

/// A source that can produce the raw instrument document.
///
/// Implementations are tried in order; the first success wins. Send + Sync
/// because the load runs on a background thread.
pub trait LoadSeriesDocument: Send + Sync {
    /// A unique identifier for this implementation (so that afterwards we know
    /// which one we used).
    fn signature(&self) -> &'static str;

    fn load_document(&self) -> Result<RawDocument>;
}

/// Tries each provider in turn, returning the first document that loads
/// together with the winning provider's signature.
pub fn get_series_document(
    providers: &[Box<dyn LoadSeriesDocument>],
) -> Result<(RawDocument, &'static str)> {
    for provider in providers {
        match provider.load_document() {
            Ok(document) => return Ok((document, provider.signature())),
            Err(e) => {
                log::info!("Document provider '{}' failed: {:#}", provider.signature(), e);
                // Continue to the next provider
            }
        }
    }
    Err(anyhow!("All document providers failed to load data"))
}

// ============================================================================
// Providers
// ============================================================================

/// Reads the document from a JSON file on disk.
#[cfg(not(target_arch = "wasm32"))]
pub struct FileDocument {
    pub path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl LoadSeriesDocument for FileDocument {
    fn signature(&self) -> &'static str {
        "JSON file"
    }

    fn load_document(&self) -> Result<RawDocument> {
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        parse_document(&text)
    }
}

/// The demo document baked into the binary. Sole source on WASM (the browser
/// build cannot read the filesystem), fallback on native.
pub struct EmbeddedDemoDocument;

const DEMO_DOCUMENT_BYTES: &[u8] = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/input_data.json"
));

impl LoadSeriesDocument for EmbeddedDemoDocument {
    fn signature(&self) -> &'static str {
        "Embedded demo document"
    }

    fn load_document(&self) -> Result<RawDocument> {
        let text = std::str::from_utf8(DEMO_DOCUMENT_BYTES)
            .context("Embedded demo document is not valid UTF-8")?;
        parse_document(text)
    }
}

/// The provider chain for this platform. Native: the file (default path or
/// `--data-path`) first, embedded demo as fallback. WASM: embedded demo only.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_providers(data_path: Option<PathBuf>) -> Vec<Box<dyn LoadSeriesDocument>> {
    let path = data_path.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
    vec![Box::new(FileDocument { path }), Box::new(EmbeddedDemoDocument)]
}

#[cfg(target_arch = "wasm32")]
pub fn default_providers(
    _data_path: Option<std::path::PathBuf>,
) -> Vec<Box<dyn LoadSeriesDocument>> {
    vec![Box::new(EmbeddedDemoDocument)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_demo_document_loads() {
        let document = EmbeddedDemoDocument.load_document().unwrap();
        assert!(document.contains_key("Inst1"));
        assert!(document.contains_key("Inst2"));
        assert!(!document["Inst1"].is_empty());
    }

    #[test]
    fn test_provider_chain_falls_through_to_demo() {
        let providers: Vec<Box<dyn LoadSeriesDocument>> = vec![
            Box::new(FileDocument {
                path: PathBuf::from("does/not/exist.json"),
            }),
            Box::new(EmbeddedDemoDocument),
        ];

        let (_, signature) = get_series_document(&providers).unwrap();
        assert_eq!(signature, "Embedded demo document");
    }
}
