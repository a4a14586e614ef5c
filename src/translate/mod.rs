//! Translation boundary: one text in, one result per target language out.

mod google;

pub use google::GoogleWebTranslator;

/// Shown in a translation slot whose remote call failed.
pub const TRANSLATION_FAILED: &str = "Translation failed";

/// Result of one translation call.
///
/// Failure is data, not an exception: a target whose call times out or
/// returns garbage degrades to a placeholder without touching the sibling
/// call or failing the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    Translated(String),
    Unavailable(String),
}

impl TranslationOutcome {
    /// Collapse the outcome into the display string for one slot.
    pub fn into_display(self, target: &str) -> String {
        match self {
            TranslationOutcome::Translated(text) => text,
            TranslationOutcome::Unavailable(reason) => {
                tracing::warn!("Translation error for {}: {}", target, reason);
                TRANSLATION_FAILED.to_string()
            }
        }
    }
}

/// Translation client trait.
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, source: &str, target: &str) -> TranslationOutcome;
}

/// Translate `text` into both configured targets.
///
/// The two calls are independent, run concurrently, and resolve per slot.
pub async fn translate_pair(
    translator: &dyn Translator,
    text: &str,
    source: &str,
    target1: &str,
    target2: &str,
) -> (String, String) {
    let (first, second) = tokio::join!(
        translator.translate(text, source, target1),
        translator.translate(text, source, target2),
    );

    (first.into_display(target1), second.into_display(target2))
}
