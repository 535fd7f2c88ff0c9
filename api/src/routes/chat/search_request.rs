use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    /// Number of results; the configured default when absent.
    pub k: Option<usize>,
}
