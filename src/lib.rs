pub mod audio;
pub mod config;
pub mod error;
pub mod http;
pub mod tls;
pub mod transcribe;
pub mod translate;

pub use config::Config;
pub use error::ServiceError;
pub use http::{create_router, AppState};
pub use transcribe::SpeechEngine;
pub use translate::{GoogleWebTranslator, TranslationOutcome, Translator, TRANSLATION_FAILED};
