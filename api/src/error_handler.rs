use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use faq_rag::FaqRagError;
use form_store::FormStoreError;
use thiserror::Error;

use crate::core::http::response_envelope::{ApiError, ApiErrorDetail};

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error(transparent)]
    Assistant(#[from] FaqRagError),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / storage ---
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    FormStore(#[from] FormStoreError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::FormStore(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            AppError::FormStore(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Assistant(_) | AppError::Bind(_) | AppError::Server(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Assistant(_) => "ASSISTANT_ERROR",
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::FormStore(FormStoreError::InvalidFilename(_)) => "INVALID_FILENAME",
            AppError::FormStore(FormStoreError::MissingField(_)) => "MISSING_FIELD",
            AppError::FormStore(FormStoreError::InvalidEmail) => "INVALID_EMAIL",
            AppError::FormStore(FormStoreError::Io(_)) => "STORAGE_ERROR",
        }
    }

    fn details(&self) -> Vec<ApiErrorDetail> {
        match self {
            AppError::FormStore(FormStoreError::MissingField(field)) => {
                vec![ApiErrorDetail::field(*field, "This field is required.")]
            }
            AppError::FormStore(FormStoreError::InvalidEmail) => {
                vec![ApiErrorDetail::field("email", "Use the form name@example.com.")]
            }
            AppError::FormStore(FormStoreError::InvalidFilename(_)) => vec![ApiErrorDetail::field(
                "filename",
                "Use a plain file name ending in .csv, e.g. quotes.csv.",
            )],
            _ => Vec::new(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Server-side failures do not leak internals.
        let message = if status.is_server_error() {
            "There was an error processing your request. Please try again.".to_string()
        } else {
            self.to_string()
        };
        ApiError::new(self.error_code(), message)
            .with_details(self.details())
            .into_envelope(status)
            .into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_errors_map_to_client_statuses() {
        let e = AppError::from(FormStoreError::MissingField("name"));
        assert_eq!(e.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(e.error_code(), "MISSING_FIELD");
        assert_eq!(e.details()[0].path.as_deref(), Some("name"));

        let io = AppError::from(FormStoreError::Io(std::io::Error::other("disk full")));
        assert_eq!(io.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(io.error_code(), "STORAGE_ERROR");
    }
}
