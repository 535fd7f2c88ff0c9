//! Unified error type for the faq-rag crate.

use thiserror::Error;

/// Errors produced by the FAQ retrieval and answering pipeline.
///
/// Most of these never reach the chat user: corpus problems degrade to an
/// empty store and generation failures become a fixed apology.
#[derive(Debug, Error)]
pub enum FaqRagError {
    // ── Configuration / environment ──────────────────────────────────────────
    /// Failed to parse an environment variable into the expected type.
    #[error("failed to parse env variable: {key} = '{value}'")]
    EnvParse { key: String, value: String },

    /// Configuration combination is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // ── I/O & filesystem ────────────────────────────────────────────────────
    /// Underlying I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // ── JSON / serialization ────────────────────────────────────────────────
    /// JSON (de)serialization error (agency profile files).
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Corpus source ───────────────────────────────────────────────────────
    /// Remote corpus could not be fetched.
    #[error("corpus fetch error: {0}")]
    Fetch(String),

    // ── Matching rules ──────────────────────────────────────────────────────
    /// A reply or follow-up pattern failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    // ── Ranking / generation ────────────────────────────────────────────────
    /// A scored result points outside the corpus it was ranked against.
    #[error("record index {index} out of range (corpus has {len} records)")]
    RecordOutOfRange { index: usize, len: usize },
}
