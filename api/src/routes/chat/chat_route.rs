use std::sync::Arc;

use axum::{Json, extract::State, http::HeaderMap};
use tracing::{debug, instrument};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::{AppError, AppResult},
    routes::chat::{chat_request::ChatRequest, chat_response::ChatResponse},
};

/// Answer one chat widget message.
#[instrument(name = "chat_route", skip_all)]
pub async fn chat_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<ChatRequest>,
) -> AppResult<ApiResponse<ChatResponse>> {
    let request_id = headers
        .get("X-Request-Id")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-");

    if body.message.trim().is_empty() {
        return Err(AppError::BadRequest("message must not be empty".into()));
    }

    debug!(
        request_id = %request_id,
        chars = body.message.chars().count(),
        "chat_route: start"
    );

    let reply = state.assistant.reply(&body.message).await;

    debug!(request_id = %request_id, reply_chars = reply.chars().count(), "chat_route: done");
    Ok(ApiResponse::ok(ChatResponse { reply }))
}
