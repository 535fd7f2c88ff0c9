//! Ranker output.

use serde::Serialize;

use crate::structs::record::Record;

/// A corpus record with its final (boosted, clamped) relevance score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredResult {
    /// Position of the record in its corpus store.
    pub index: usize,
    /// Relevance in `[0, 1]`.
    pub score: f32,
    pub record: Record,
}
