//! Error type for the form-store crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormStoreError {
    // ── Request validation ──────────────────────────────────────────────────
    /// Filename is not a single `*.csv` path component.
    #[error("invalid filename '{0}': expected a plain name ending in .csv")]
    InvalidFilename(String),

    /// A required field is missing or blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The email address does not look like `local@domain.tld`.
    #[error("invalid email format")]
    InvalidEmail,

    // ── I/O ─────────────────────────────────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl FormStoreError {
    /// Whether the caller sent bad input (as opposed to a server-side failure).
    pub fn is_client_error(&self) -> bool {
        !matches!(self, FormStoreError::Io(_))
    }
}
