//! Chat endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, warn};

use super::{ApiError, AppState};
use crate::types::{ChatRequest, ChatResponse, StatusMessage};

/// Banner returned by `GET /`
pub const STATUS_MESSAGE: &str = "Construction Chatbot Backend Running ✅";

/// GET / - Report that the backend is up
pub async fn root() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: STATUS_MESSAGE.to_string(),
    })
}

/// POST /chat - Answer a construction question
///
/// Malformed bodies are rejected before the resolver runs; every
/// well-formed request gets exactly one answer.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(status = %rejection.status(), "Rejected chat request: {}", rejection.body_text());
            let error = ApiError::bad_request(rejection.body_text());
            return (rejection.status(), Json(error)).into_response();
        }
    };

    let answer = state.resolver.resolve(&request.query);
    debug!(
        kind = answer.kind(),
        topic = answer.topic().unwrap_or("-"),
        "Resolved chat query"
    );

    (
        StatusCode::OK,
        Json(ChatResponse {
            answer: answer.into_text(),
        }),
    )
        .into_response()
}
