//! Entry point tying configuration, the knowledge base and the responder.

use std::sync::Arc;

use tracing::info;

use crate::errors::faq_rag_error::FaqRagError;
use crate::knowledge_base::{CorpusSource, KnowledgeBase};
use crate::responder::Responder;
use crate::structs::agency_profile::AgencyProfile;
use crate::structs::faq_config::FaqConfig;
use crate::structs::scored_result::ScoredResult;
use crate::suggestions::{RandomPicker, SuggestionPicker};

/// A ready-to-serve FAQ assistant.
#[derive(Debug)]
pub struct FaqAssistant {
    config: FaqConfig,
    knowledge_base: KnowledgeBase,
    responder: Responder,
}

impl FaqAssistant {
    pub fn new(config: FaqConfig, knowledge_base: KnowledgeBase, responder: Responder) -> Self {
        Self {
            config,
            knowledge_base,
            responder,
        }
    }

    /// Build from `FaqConfig::from_env()`.
    pub async fn from_env() -> Result<Self, FaqRagError> {
        Self::from_config(FaqConfig::from_env()?, Arc::new(RandomPicker)).await
    }

    /// Build from an explicit config. The agency profile is read from
    /// `config.profile_path` when set; the corpus is loaded lazily.
    pub async fn from_config(
        config: FaqConfig,
        picker: Arc<dyn SuggestionPicker>,
    ) -> Result<Self, FaqRagError> {
        config.validate()?;

        let profile = match &config.profile_path {
            Some(path) => AgencyProfile::from_json_file(path).await?,
            None => AgencyProfile::default(),
        };
        info!(
            target: "faq_rag::responder",
            agency = %profile.name,
            agents = profile.agents.len(),
            "agency profile loaded"
        );

        let knowledge_base = KnowledgeBase::new(
            CorpusSource::from_config(&config.corpus),
            profile.overview_sentence(),
        );
        let responder = Responder::new(profile, picker, config.search.clone())?;
        Ok(Self::new(config, knowledge_base, responder))
    }

    /// Answer one chat message.
    pub async fn reply(&self, message: &str) -> String {
        let store = self.knowledge_base.store().await;
        self.responder.respond(&store, message)
    }

    /// Ranked results; `top_k` defaults to the configured value.
    pub async fn search(&self, query: &str, top_k: Option<usize>) -> Vec<ScoredResult> {
        let k = top_k.unwrap_or(self.config.search.top_k);
        self.knowledge_base.search(query, k).await
    }

    /// Reload the corpus and return the new record count.
    pub async fn reload(&self) -> usize {
        self.knowledge_base.reload().await.len()
    }
}
