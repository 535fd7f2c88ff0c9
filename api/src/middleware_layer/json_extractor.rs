//! Turns axum's plain-text `Json` extractor rejections into the API envelope.

use axum::{
    body::{Body, to_bytes},
    http::{HeaderValue, Request, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use tracing::debug;

use crate::core::http::response_envelope::{ApiError, ApiErrorDetail};

const REQUEST_ID: &str = "X-Request-Id";

/// Rejection text fragment and the hint sent back for it.
const HINTS: [(&str, &str); 4] = [
    ("missing field", "Include every required field in the JSON body."),
    ("invalid type", "Check the value types, e.g. `k` is a positive integer."),
    ("expected a map", "Send a JSON object, e.g. {\"message\": \"hello\"}."),
    ("Content-Type", "Send the body with Content-Type: application/json."),
];

/// serde names the offending field in backticks: "missing field `message`".
fn field_named_in(rejection: &str) -> Option<String> {
    let mut parts = rejection.split('`');
    parts.next()?;
    parts
        .next()
        .filter(|f| !f.is_empty() && f.chars().all(|c| c.is_alphanumeric() || c == '_'))
        .map(str::to_string)
}

fn hint_for(rejection: &str) -> Option<String> {
    HINTS
        .iter()
        .find(|(fragment, _)| rejection.contains(fragment))
        .map(|(_, hint)| hint.to_string())
}

fn request_id_of(res: &Response) -> Option<String> {
    res.headers()
        .get(REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

fn is_json(res: &Response) -> bool {
    res.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}

/// Every 400/422 leaves with an `X-Request-Id`. Plain-text bodies (extractor
/// rejections) are replaced by an error envelope; JSON bodies are kept.
pub async fn json_error_mapper(req: Request<Body>, next: Next) -> Response {
    let res = next.run(req).await;
    let status = res.status();
    if status != StatusCode::BAD_REQUEST && status != StatusCode::UNPROCESSABLE_ENTITY {
        return res;
    }

    let request_id =
        request_id_of(&res).unwrap_or_else(|| format!("req-{}", Utc::now().timestamp_micros()));

    let mut res = if is_json(&res) {
        res
    } else {
        let bytes = to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap_or_default();
        let rejection = String::from_utf8_lossy(&bytes).trim().to_string();
        debug!(
            request_id = %request_id,
            status = status.as_u16(),
            rejection = %rejection,
            "json_error_mapper: rewriting extractor rejection"
        );

        let code = if status == StatusCode::BAD_REQUEST {
            "BAD_REQUEST"
        } else {
            "UNPROCESSABLE_ENTITY"
        };
        let detail = ApiErrorDetail {
            path: field_named_in(&rejection),
            hint: hint_for(&rejection),
        };
        ApiError::new(code, rejection)
            .with_details(vec![detail])
            .into_envelope(status)
            .into_response()
    };

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        res.headers_mut().insert(REQUEST_ID, value);
    }
    res
}
