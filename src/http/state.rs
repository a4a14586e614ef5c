use crate::config::Config;
use crate::transcribe::SpeechEngine;
use crate::translate::Translator;
use std::sync::Arc;

/// Shared application state for HTTP handlers.
///
/// The engine and translator are injected handles, so tests swap in mocks
/// and the process owns exactly one model instance.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn SpeechEngine>,
    pub translator: Arc<dyn Translator>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        engine: Arc<dyn SpeechEngine>,
        translator: Arc<dyn Translator>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            engine,
            translator,
            config,
        }
    }
}
