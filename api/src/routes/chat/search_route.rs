use std::sync::Arc;

use axum::{Json, extract::State};
use faq_rag::{classify_intent, classify_question_type};
use tracing::debug;

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::{AppError, AppResult},
    routes::chat::{search_request::SearchRequest, search_response::SearchResponse},
};

/// Raw ranked results for a query, for debugging the corpus and boosts.
pub async fn search_route(
    State(state): State<Arc<AppState>>,
    Json(p): Json<SearchRequest>,
) -> AppResult<ApiResponse<SearchResponse>> {
    if p.k == Some(0) {
        return Err(AppError::BadRequest("k must be greater than zero".into()));
    }

    let results = state.assistant.search(&p.query, p.k).await;
    debug!(
        query = %p.query,
        hits = results.len(),
        "search_route: success"
    );

    let body = SearchResponse {
        intent: classify_intent(&p.query),
        question_type: classify_question_type(&p.query),
        query: p.query,
        results,
    };
    Ok(ApiResponse::ok(body))
}
