//! Lazily loaded, swappable corpus store.
//!
//! The first `store()` call loads the source; concurrent first callers wait
//! on the same load instead of starting their own. `reload()` builds a fresh
//! store and swaps it in; readers holding the old `Arc` keep using it.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

use crate::corpus::CorpusStore;
use crate::errors::faq_rag_error::FaqRagError;
use crate::structs::faq_config::CorpusConfig;
use crate::structs::record::Record;
use crate::structs::scored_result::ScoredResult;

/// Where corpus content is read from.
#[derive(Debug, Clone)]
pub enum CorpusSource {
    /// Structured text file on disk.
    File(PathBuf),
    /// Structured text served over HTTP.
    Url { url: String, timeout: Duration },
    /// Structured text held in memory.
    Text(String),
    /// Pre-built records (no overview record is added).
    Records(Vec<Record>),
}

impl CorpusSource {
    /// URL wins over the file path when both are configured.
    pub fn from_config(cfg: &CorpusConfig) -> Self {
        match &cfg.url {
            Some(url) => CorpusSource::Url {
                url: url.clone(),
                timeout: Duration::from_secs(cfg.fetch_timeout_secs),
            },
            None => CorpusSource::File(cfg.path.clone()),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CorpusSource::File(_) => "file",
            CorpusSource::Url { .. } => "url",
            CorpusSource::Text(_) => "text",
            CorpusSource::Records(_) => "records",
        }
    }
}

/// Owner of the current corpus store.
#[derive(Debug)]
pub struct KnowledgeBase {
    source: CorpusSource,
    overview: String,
    current: RwLock<Option<Arc<CorpusStore>>>,
    init: Mutex<()>,
    loads: AtomicUsize,
}

impl KnowledgeBase {
    /// `overview` is the sentence of the synthetic overview record appended
    /// to text sources.
    pub fn new(source: CorpusSource, overview: impl Into<String>) -> Self {
        Self {
            source,
            overview: overview.into(),
            current: RwLock::new(None),
            init: Mutex::new(()),
            loads: AtomicUsize::new(0),
        }
    }

    /// Number of completed source loads (initial load plus reloads).
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub async fn is_initialized(&self) -> bool {
        self.current.read().await.is_some()
    }

    /// The loaded store, loading it exactly once on first use.
    pub async fn store(&self) -> Arc<CorpusStore> {
        if let Some(store) = self.current.read().await.clone() {
            return store;
        }

        let _guard = self.init.lock().await;
        // Another caller may have finished loading while we waited.
        if let Some(store) = self.current.read().await.clone() {
            return store;
        }

        let store = Arc::new(self.load().await);
        *self.current.write().await = Some(Arc::clone(&store));
        store
    }

    /// Rebuild the store from the source and swap it in.
    pub async fn reload(&self) -> Arc<CorpusStore> {
        let _guard = self.init.lock().await;
        let store = Arc::new(self.load().await);
        *self.current.write().await = Some(Arc::clone(&store));
        store
    }

    pub async fn search(&self, query: &str, top_k: usize) -> Vec<ScoredResult> {
        self.store().await.search(query, top_k)
    }

    /// Load the source; every failure degrades to an empty store.
    async fn load(&self) -> CorpusStore {
        info!(
            target: "faq_rag::corpus",
            source = self.source.kind(),
            "loading corpus"
        );

        let store = match &self.source {
            CorpusSource::Records(records) => CorpusStore::from_records(records.clone()),
            source => match read_source_text(source).await {
                Ok(text) => CorpusStore::from_text_with_overview(&text, &self.overview),
                Err(err) => {
                    warn!(
                        target: "faq_rag::corpus",
                        source = source.kind(),
                        error = %err,
                        "corpus unavailable, continuing with an empty store"
                    );
                    CorpusStore::empty()
                }
            },
        };

        self.loads.fetch_add(1, Ordering::SeqCst);
        info!(
            target: "faq_rag::corpus",
            records = store.len(),
            "corpus ready"
        );
        store
    }
}

async fn read_source_text(source: &CorpusSource) -> Result<String, FaqRagError> {
    match source {
        CorpusSource::File(path) => Ok(tokio::fs::read_to_string(path).await?),
        CorpusSource::Url { url, timeout } => fetch_text(url, *timeout).await,
        CorpusSource::Text(text) => Ok(text.clone()),
        CorpusSource::Records(_) => Ok(String::new()),
    }
}

async fn fetch_text(url: &str, timeout: Duration) -> Result<String, FaqRagError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| FaqRagError::Fetch(e.to_string()))?;
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| FaqRagError::Fetch(e.to_string()))?;
    let resp = resp
        .error_for_status()
        .map_err(|e| FaqRagError::Fetch(e.to_string()))?;
    resp.text()
        .await
        .map_err(|e| FaqRagError::Fetch(e.to_string()))
}
