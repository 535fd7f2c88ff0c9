//! Configuration layer: reads runtime settings from environment variables
//! and exposes strongly typed configs for the corpus source, search, and the
//! agency profile.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::faq_rag_error::FaqRagError;
use crate::search::DEFAULT_TOP_K;

/// Where the corpus text comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Structured text file produced by the site scraper.
    pub path: PathBuf,
    /// Optional HTTP location; takes precedence over `path` when set.
    pub url: Option<String>,
    /// Timeout for the HTTP fetch, in seconds.
    pub fetch_timeout_secs: u64,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/website_content.txt"),
            url: None,
            fetch_timeout_secs: 30,
        }
    }
}

/// Search and answer knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Default top-k for direct searches.
    pub top_k: usize,
    /// Top-k the answer generator ranks before composing a reply.
    pub answer_top_k: usize,
    /// Top scores below this ask the user to clarify instead of answering.
    pub clarify_below: f32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            answer_top_k: 5,
            clarify_below: 0.25,
        }
    }
}

/// Top-level runtime configuration for the FAQ assistant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaqConfig {
    pub corpus: CorpusConfig,
    pub search: SearchConfig,
    /// Optional JSON file overriding the built-in agency profile.
    pub profile_path: Option<PathBuf>,
}

impl FaqConfig {
    /// Build configuration from environment variables.
    ///
    /// Environment variables used:
    /// - `FAQ_CORPUS_PATH` (default: `data/website_content.txt`)
    /// - `FAQ_CORPUS_URL` (optional)
    /// - `FAQ_FETCH_TIMEOUT_SECS` (default: 30)
    /// - `FAQ_TOP_K` (default: 3)
    /// - `FAQ_ANSWER_TOP_K` (default: 5)
    /// - `FAQ_CLARIFY_BELOW` (default: 0.25)
    /// - `AGENCY_PROFILE_PATH` (optional)
    pub fn from_env() -> Result<Self, FaqRagError> {
        let defaults = FaqConfig::default();

        let corpus = CorpusConfig {
            path: std::env::var("FAQ_CORPUS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.corpus.path),
            url: std::env::var("FAQ_CORPUS_URL")
                .ok()
                .filter(|u| !u.trim().is_empty()),
            fetch_timeout_secs: read_env("FAQ_FETCH_TIMEOUT_SECS")?
                .unwrap_or(defaults.corpus.fetch_timeout_secs),
        };

        let search = SearchConfig {
            top_k: read_env("FAQ_TOP_K")?.unwrap_or(defaults.search.top_k),
            answer_top_k: read_env("FAQ_ANSWER_TOP_K")?.unwrap_or(defaults.search.answer_top_k),
            clarify_below: read_env("FAQ_CLARIFY_BELOW")?.unwrap_or(defaults.search.clarify_below),
        };

        let cfg = Self {
            corpus,
            search,
            profile_path: std::env::var("AGENCY_PROFILE_PATH").ok().map(PathBuf::from),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject knob combinations the pipeline cannot honor.
    pub fn validate(&self) -> Result<(), FaqRagError> {
        if self.search.top_k == 0 {
            return Err(FaqRagError::InvalidConfig("FAQ_TOP_K must be > 0".into()));
        }
        if self.search.answer_top_k == 0 {
            return Err(FaqRagError::InvalidConfig(
                "FAQ_ANSWER_TOP_K must be > 0".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.search.clarify_below) {
            return Err(FaqRagError::InvalidConfig(
                "FAQ_CLARIFY_BELOW must be within 0.0..=1.0".into(),
            ));
        }
        Ok(())
    }
}

/// Read an optional env value; a present but unparsable value is an error.
fn read_env<T: std::str::FromStr>(key: &str) -> Result<Option<T>, FaqRagError> {
    match std::env::var(key) {
        Ok(v) => v
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| FaqRagError::EnvParse {
                key: key.into(),
                value: v,
            }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = FaqConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.search.top_k, DEFAULT_TOP_K);
        assert_eq!(cfg.search.answer_top_k, 5);
        assert_eq!(cfg.search.clarify_below, 0.25);
    }

    #[test]
    fn zero_top_k_is_rejected() {
        let mut cfg = FaqConfig::default();
        cfg.search.top_k = 0;
        assert!(matches!(cfg.validate(), Err(FaqRagError::InvalidConfig(_))));
    }

    #[test]
    fn threshold_out_of_range_is_rejected() {
        let mut cfg = FaqConfig::default();
        cfg.search.clarify_below = 1.5;
        assert!(cfg.validate().is_err());
    }
}
