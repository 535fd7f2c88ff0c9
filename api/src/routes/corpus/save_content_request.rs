use serde::{Deserialize, Serialize};

/// Structured corpus text, already in section/heading line form.
#[derive(Debug, Deserialize)]
pub struct SaveContentRequest {
    pub content: Option<String>,
}

/// Rendered page HTML to convert into corpus text.
#[derive(Debug, Deserialize)]
pub struct SaveHtmlRequest {
    pub html: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveContentResponse {
    pub message: String,
    pub file_path: String,
    /// Records in the reloaded corpus.
    pub records: usize,
}
