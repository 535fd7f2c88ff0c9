use std::sync::Arc;

use axum::{Json, extract::State};
use faq_rag::build_corpus_text;
use form_store::CORPUS_FILE_NAME;
use tracing::info;

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::{AppError, AppResult},
    routes::corpus::save_content_request::{
        SaveContentRequest, SaveContentResponse, SaveHtmlRequest,
    },
};

/// Persist corpus text and reload the assistant's knowledge base.
pub async fn save_content_route(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SaveContentRequest>,
) -> AppResult<ApiResponse<SaveContentResponse>> {
    let content = body
        .content
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("No content provided".into()))?;
    persist_and_reload(&state, &content).await
}

/// Convert a rendered page to corpus text, then persist and reload.
pub async fn save_html_route(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SaveHtmlRequest>,
) -> AppResult<ApiResponse<SaveContentResponse>> {
    let html = body
        .html
        .filter(|h| !h.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("No html provided".into()))?;

    let content = build_corpus_text(&html);
    if content.trim().is_empty() {
        return Err(AppError::BadRequest(
            "page has no <section> or #footer content".into(),
        ));
    }
    persist_and_reload(&state, &content).await
}

async fn persist_and_reload(
    state: &AppState,
    content: &str,
) -> AppResult<ApiResponse<SaveContentResponse>> {
    let path = state.submissions.save_content(content).await?;
    let records = state.assistant.reload().await;

    info!(
        file = %path.display(),
        records,
        "corpus text saved and knowledge base reloaded"
    );

    let body = SaveContentResponse {
        message: "Website content saved successfully".into(),
        file_path: format!("/data/{CORPUS_FILE_NAME}"),
        records,
    };
    Ok(ApiResponse::ok(body))
}
