//! HTTP API for the chatbot
//!
//! - `GET /` - service banner
//! - `GET /health` - liveness probe
//! - `POST /chat` - resolve a question into an answer

pub mod chat;
pub mod http;
pub mod state;

use serde::{Deserialize, Serialize};

pub use http::{create_router, serve, shutdown_signal};
pub use state::AppState;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }
}
