//! Contact inquiry validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::form_store_error::FormStoreError;
use crate::structs::inquiry::{Inquiry, ValidInquiry};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

fn required(value: &Option<String>, field: &'static str) -> Result<String, FormStoreError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(FormStoreError::MissingField(field))
}

/// Check required fields and the email shape. The reCAPTCHA token must be
/// present but is not verified.
pub fn validate_inquiry(inquiry: &Inquiry) -> Result<ValidInquiry, FormStoreError> {
    let valid = ValidInquiry {
        name: required(&inquiry.name, "name")?,
        email: required(&inquiry.email, "email")?,
        phone: required(&inquiry.phone, "phone")?,
        insurance_type: required(&inquiry.insurance_type, "insuranceType")?,
        message: required(&inquiry.message, "message")?,
        opt_in: inquiry.opt_in,
    };
    required(&inquiry.recaptcha_token, "recaptchaToken")?;

    if !EMAIL_RE.is_match(&valid.email) {
        return Err(FormStoreError::InvalidEmail);
    }
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Inquiry {
        serde_json::from_str(
            r#"{
                "name": "Dana Reyes",
                "email": "dana@example.com",
                "phone": "555-0100",
                "insuranceType": "auto",
                "message": "Need a quote",
                "recaptchaToken": "tok"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn complete_inquiry_passes_and_opt_in_defaults_false() {
        let v = validate_inquiry(&complete()).unwrap();
        assert_eq!(v.insurance_type, "auto");
        assert!(!v.opt_in);
    }

    #[test]
    fn blank_or_missing_fields_are_reported_by_name() {
        let mut i = complete();
        i.phone = Some("   ".into());
        assert!(matches!(validate_inquiry(&i), Err(FormStoreError::MissingField("phone"))));

        let mut i = complete();
        i.recaptcha_token = None;
        assert!(matches!(
            validate_inquiry(&i),
            Err(FormStoreError::MissingField("recaptchaToken"))
        ));
    }

    #[test]
    fn email_shape_is_checked() {
        for bad in ["dana", "dana@example", "da na@example.com", "@example.com"] {
            let mut i = complete();
            i.email = Some(bad.into());
            assert!(matches!(validate_inquiry(&i), Err(FormStoreError::InvalidEmail)), "{bad}");
        }
    }
}
