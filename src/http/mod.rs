//! HTTP surface of the app:
//! - GET / - the recording page
//! - POST /upload - one audio blob in, transcription out
//! - POST /translate - one text in, two target-language slots out
//! - GET /health - Health check

mod handlers;
mod page;
mod routes;
mod state;

pub use handlers::{TranslateRequest, TranslateResponse, UploadResponse};
pub use routes::create_router;
pub use state::AppState;
