use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::error;

use crate::{
    core::{
        app_state::AppState,
        http::response_envelope::{ApiResponse, MessageBody},
    },
    error_handler::{AppError, AppResult},
    routes::forms::save_csv_request::SaveCsvRequest,
};

pub async fn save_csv_route(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SaveCsvRequest>,
) -> AppResult<ApiResponse<MessageBody>> {
    let (Some(filename), Some(data)) = (body.filename, body.data) else {
        return Err(AppError::BadRequest("Filename and data are required".into()));
    };

    state
        .submissions
        .save_csv(&filename, &data)
        .await
        .inspect_err(|err| {
            error!(target: "form_store::csv", file = %filename, error = %err, "saving csv failed");
        })?;

    Ok(ApiResponse::ok(MessageBody::new(
        "Data saved to CSV successfully",
    )))
}
