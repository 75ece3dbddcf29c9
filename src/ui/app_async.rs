use eframe::egui;
use itertools::Itertools;
use poll_promise::Promise;
use std::time::Duration;

use crate::data::{LoadOutcome, LoadSeriesDocument, default_providers, load_instrument_set};
use crate::ui::app::{AppError, LoadState, PriceBoardApp};
use crate::utils::app_time::now;

pub(super) struct AsyncLoadResult {
    pub(super) result: Result<LoadOutcome, AppError>,
    elapsed_time: Duration,
}

impl AsyncLoadResult {
    pub(super) fn elapsed_time(&self) -> Duration {
        self.elapsed_time
    }
}

impl PriceBoardApp {
    /// Kicks off the document load on a background thread. A no-op while a
    /// load is already in flight, so Retry cannot stack requests.
    pub(super) fn start_load(&mut self) {
        if self.load_promise.is_some() {
            return;
        }

        self.load_state = LoadState::Loading;
        let providers = default_providers(self.data_path.clone());

        #[cfg(not(target_arch = "wasm32"))]
        let promise = Promise::spawn_thread("document_load", move || run_document_load(providers));

        // The wasm build loads from the embedded document, which resolves
        // synchronously.
        #[cfg(target_arch = "wasm32")]
        let promise = Promise::from_ready(run_document_load(providers));

        self.load_promise = Some(promise);
    }

    pub(super) fn poll_load(&mut self, ctx: &egui::Context) {
        let outcome = self.load_promise.as_ref().and_then(|promise| {
            promise
                .ready()
                .map(|load_result| (load_result.result.clone(), load_result.elapsed_time()))
        });

        if let Some((result, elapsed)) = outcome {
            self.load_promise = None;

            match result {
                Ok(outcome) => {
                    log::info!(
                        "✅ Document load completed in {:.2}s ({})",
                        elapsed.as_secs_f32(),
                        outcome.source
                    );

                    self.data_source = Some(outcome.source);
                    self.dropped_observations = outcome.warnings.len();
                    if !outcome.warnings.is_empty() {
                        // One toast for the whole load: every dropped entry,
                        // one per line.
                        self.toast.show(outcome.warnings.iter().join("\n"));
                    }
                    self.load_state = LoadState::Ready(outcome.set);
                }
                Err(error) => {
                    log::error!("❌ Document load failed: {}", error);
                    self.load_state = LoadState::Failed(error);
                }
            }
        } else if self.load_promise.is_some() {
            ctx.request_repaint();
        }
    }

    pub(super) fn is_loading(&self) -> bool {
        self.load_promise.is_some()
    }
}

fn run_document_load(providers: Vec<Box<dyn LoadSeriesDocument>>) -> AsyncLoadResult {
    let load_start = now();

    let result =
        load_instrument_set(&providers).map_err(|e| AppError::LoadFailed(format!("{:#}", e)));

    AsyncLoadResult {
        result,
        elapsed_time: load_start.elapsed(),
    }
}
