use faq_rag::FaqAssistant;
use form_store::SubmissionStore;

use crate::error_handler::AppError;

/// Shared state for all HTTP handlers.
#[derive(Debug)]
pub struct AppState {
    /// Chat assistant with its lazily loaded corpus.
    pub assistant: FaqAssistant,
    /// Flat-file sink for form submissions and corpus text.
    pub submissions: SubmissionStore,
}

impl AppState {
    pub fn new(assistant: FaqAssistant, submissions: SubmissionStore) -> Self {
        Self {
            assistant,
            submissions,
        }
    }

    /// Build state from environment variables (`FAQ_*`, `AGENCY_PROFILE_PATH`,
    /// `FORM_DATA_DIR`).
    pub async fn from_env() -> Result<Self, AppError> {
        let assistant = FaqAssistant::from_env().await?;
        Ok(Self::new(assistant, SubmissionStore::from_env()))
    }
}
