use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub language: LanguageConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub bind: String,
    pub port: u16,
    /// Validity window of the throwaway self-signed certificate.
    pub cert_validity_days: i64,
    /// Directory holding transient per-upload audio files.
    pub upload_dir: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 5000,
            cert_validity_days: 1,
            upload_dir: "uploads".to_string(),
        }
    }
}

/// Language settings, fixed at startup and read by every request.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// ISO 639-1 code the speech engine decodes (and translation source).
    pub source: String,
    pub target1: String,
    pub target2: String,
    pub target1_name: String,
    pub target2_name: String,
    pub target1_placeholder: String,
    pub target2_placeholder: String,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            source: "es".to_string(),
            target1: "en".to_string(),
            target2: "ar".to_string(),
            target1_name: "English Translation".to_string(),
            target2_name: "Arabic Translation".to_string(),
            target1_placeholder: "Translation will appear here...".to_string(),
            target2_placeholder: "الترجمة ستظهر هنا...".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// whisper.cpp ggml/gguf model file. Size and quantisation are baked
    /// into the file itself.
    pub path: String,
    pub threads: usize,
    pub beam_size: i32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: "models/ggml-medium.bin".to_string(),
            threads: 4,
            beam_size: 2,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://translate.googleapis.com/translate_a/single".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
