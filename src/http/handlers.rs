use super::page;
use super::state::AppState;
use crate::audio;
use crate::error::ServiceError;
use crate::translate::translate_pair;
use anyhow::{Context, Result};
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::info;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub transcription: String,
}

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translation1: String,
    pub translation2: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
/// The single page: capture client, transcript box, two translation slots.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(page::render_index(&state.config.language))
}

/// POST /upload
/// Accept one recorded audio blob, transcribe it, return the text.
pub async fn upload_audio(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ServiceError> {
    let mut audio_bytes = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServiceError::BadRequest(format!("malformed upload: {e}")))?
    {
        if field.name() == Some("audio") {
            let data = field
                .bytes()
                .await
                .map_err(|e| ServiceError::BadRequest(format!("failed reading audio: {e}")))?;
            audio_bytes = Some(data);
        }
    }

    let audio_bytes =
        audio_bytes.ok_or_else(|| ServiceError::BadRequest("no audio file received".into()))?;
    if audio_bytes.is_empty() {
        return Err(ServiceError::BadRequest("empty audio upload".into()));
    }

    let upload_dir = state.config.service.upload_dir.clone();
    let samples = tokio::task::spawn_blocking(move || decode_upload(&upload_dir, &audio_bytes))
        .await
        .map_err(|e| ServiceError::Internal(format!("decode task failed: {e}")))?
        .map_err(|e| ServiceError::Engine(format!("{e:#}")))?;

    let transcription = state
        .engine
        .transcribe(samples)
        .await
        .map_err(|e| ServiceError::Engine(format!("{e:#}")))?;

    info!("Transcription: {}", transcription);

    Ok(Json(UploadResponse { transcription }))
}

/// Persist the blob to a transient time-named file and decode it for the
/// engine. The temp file is removed when the guard drops, decode success or
/// failure alike.
fn decode_upload(upload_dir: &str, audio_bytes: &[u8]) -> Result<Vec<f32>> {
    std::fs::create_dir_all(upload_dir)
        .with_context(|| format!("failed to create upload dir {upload_dir}"))?;

    let prefix = format!("recording_{}_", chrono::Utc::now().timestamp_millis());
    let file = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(".wav")
        .tempfile_in(upload_dir)
        .context("failed to create transient audio file")?;

    std::fs::write(file.path(), audio_bytes).context("failed to save uploaded audio")?;
    info!("Saved audio file: {}", file.path().display());

    audio::decode_for_engine(file.path())
}

/// POST /translate
/// Translate one text into both configured target languages.
pub async fn translate_text(
    State(state): State<AppState>,
    Json(req): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ServiceError> {
    let text = req.text.trim();
    if text.is_empty() {
        return Err(ServiceError::BadRequest(
            "no text provided or text is empty".into(),
        ));
    }

    info!("Translating text: '{}'", text);

    let lang = &state.config.language;
    let (translation1, translation2) = translate_pair(
        state.translator.as_ref(),
        text,
        &lang.source,
        &lang.target1,
        &lang.target2,
    )
    .await;

    Ok(Json(TranslateResponse {
        translation1,
        translation2,
    }))
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
