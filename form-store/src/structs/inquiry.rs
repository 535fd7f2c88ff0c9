use serde::{Deserialize, Serialize};

/// Contact form payload as posted by the site.
///
/// Every field is optional at the wire level so that missing values are
/// reported as validation errors rather than deserialization failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub insurance_type: Option<String>,
    pub message: Option<String>,
    #[serde(default)]
    pub opt_in: bool,
    pub recaptcha_token: Option<String>,
}

/// An inquiry that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub insurance_type: String,
    pub message: String,
    pub opt_in: bool,
}
