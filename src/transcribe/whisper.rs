use super::SpeechEngine;
use crate::config::ModelConfig;
use anyhow::{anyhow, Context, Result};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

/// whisper.cpp engine.
///
/// The context is loaded once and shared; inference is serialised behind an
/// async mutex so concurrent uploads queue on the model explicitly instead
/// of contending inside the native library.
pub struct WhisperEngine {
    context: Arc<WhisperContext>,
    gate: Mutex<()>,
    language: String,
    threads: i32,
    beam_size: i32,
}

impl WhisperEngine {
    pub fn load(model: &ModelConfig, language: &str) -> Result<Self> {
        info!("Loading whisper model from {}", model.path);

        let context =
            WhisperContext::new_with_params(&model.path, WhisperContextParameters::default())
                .with_context(|| format!("failed to load whisper model at {}", model.path))?;

        Ok(Self {
            context: Arc::new(context),
            gate: Mutex::new(()),
            language: language.to_string(),
            threads: model.threads.max(1) as i32,
            beam_size: model.beam_size.max(1),
        })
    }

    fn run_inference(
        context: &WhisperContext,
        samples: &[f32],
        language: &str,
        threads: i32,
        beam_size: i32,
    ) -> Result<String> {
        let mut state = context
            .create_state()
            .map_err(|e| anyhow!("failed to create whisper state: {e}"))?;

        let mut params = FullParams::new(SamplingStrategy::BeamSearch {
            beam_size,
            patience: -1.0,
        });
        params.set_n_threads(threads);
        params.set_language(Some(language));
        params.set_token_timestamps(false);
        params.set_print_realtime(false);
        params.set_print_progress(false);
        params.set_print_timestamps(false);

        state
            .full(params, samples)
            .map_err(|e| anyhow!("whisper decode failed: {e}"))?;

        let mut pieces = Vec::new();
        for idx in 0..state.full_n_segments() {
            let Some(segment) = state.get_segment(idx) else {
                continue;
            };
            if let Ok(text) = segment.to_str_lossy() {
                pieces.push(text.trim().to_string());
            }
        }

        Ok(pieces.join(" "))
    }
}

#[async_trait::async_trait]
impl SpeechEngine for WhisperEngine {
    async fn transcribe(&self, samples: Vec<f32>) -> Result<String> {
        // One inference at a time on the shared model.
        let _guard = self.gate.lock().await;

        let context = Arc::clone(&self.context);
        let language = self.language.clone();
        let threads = self.threads;
        let beam_size = self.beam_size;

        tokio::task::spawn_blocking(move || {
            Self::run_inference(&context, &samples, &language, threads, beam_size)
        })
        .await
        .context("whisper inference task panicked")?
    }

    fn name(&self) -> &str {
        "whisper"
    }
}
