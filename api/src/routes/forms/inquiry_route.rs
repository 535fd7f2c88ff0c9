use axum::Json;
use form_store::{Inquiry, validate_inquiry};
use tracing::{info, warn};

use crate::{
    core::http::response_envelope::{ApiResponse, MessageBody},
    error_handler::AppResult,
};

/// Contact form submission. The submission is validated and logged; no
/// email is sent and the reCAPTCHA token is not verified.
pub async fn inquiry_route(
    Json(inquiry): Json<Inquiry>,
) -> AppResult<ApiResponse<MessageBody>> {
    let valid = validate_inquiry(&inquiry).inspect_err(|err| {
        warn!(target: "form_store::inquiry", error = %err, "inquiry rejected");
    })?;

    info!(
        target: "form_store::inquiry",
        name = %valid.name,
        email = %valid.email,
        phone = %valid.phone,
        insurance_type = %valid.insurance_type,
        opt_in = if valid.opt_in { "Yes" } else { "No" },
        "form submission received"
    );

    Ok(ApiResponse::ok(MessageBody::new(
        "Thank you for contacting us. We will get back to you soon.",
    )))
}
