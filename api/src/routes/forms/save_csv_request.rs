use serde::Deserialize;

/// `data` holds a CSV header line and one data row.
#[derive(Debug, Deserialize)]
pub struct SaveCsvRequest {
    pub filename: Option<String>,
    pub data: Option<String>,
}
