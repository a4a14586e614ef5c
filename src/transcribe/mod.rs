//! Speech-to-text engine boundary.
//!
//! One engine instance is loaded at startup and shared by every upload
//! request through an `Arc<dyn SpeechEngine>` handle on the router state.

#[cfg(feature = "whisper-runtime")]
mod whisper;

#[cfg(feature = "whisper-runtime")]
pub use whisper::WhisperEngine;

use anyhow::Result;

/// Transcription engine trait.
///
/// Implementations take engine-rate mono PCM and return the full transcript
/// as one flat string (segments joined with single spaces).
#[async_trait::async_trait]
pub trait SpeechEngine: Send + Sync {
    async fn transcribe(&self, samples: Vec<f32>) -> Result<String>;

    /// Engine name for logging.
    fn name(&self) -> &str;
}
