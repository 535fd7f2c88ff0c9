//! Ranker: base similarity plus boost rules, clamp, stable sort, top-K and a
//! product-line diversity backfill.

use tracing::debug;

use crate::boost_rules::{QueryContext, RecordView, total_boost};
use crate::corpus::CorpusStore;
use crate::embedding::embed;
use crate::similarity::similarity;
use crate::structs::record::ProductLine;
use crate::structs::scored_result::ScoredResult;

/// Default `top_k` for direct searches (`FAQ_TOP_K`).
pub const DEFAULT_TOP_K: usize = 3;

impl CorpusStore {
    /// Rank every record against `query` and keep the best `top_k`.
    ///
    /// Output is sorted by non-increasing score, holds at most `top_k`
    /// entries and every score is at most 1.0. An empty store yields nothing.
    pub fn search(&self, query: &str, top_k: usize) -> Vec<ScoredResult> {
        if self.is_empty() || top_k == 0 {
            debug!(
                target: "faq_rag::search",
                records = self.len(),
                top_k,
                "search: nothing to rank"
            );
            return Vec::new();
        }

        let ctx = QueryContext::new(query);
        let ranked = self.rank_all(&ctx);

        let mut top: Vec<ScoredResult> = ranked.iter().take(top_k).cloned().collect();
        if let Some(line) = ctx.intent.product_line() {
            backfill(&mut top, &ranked, line);
        }

        debug!(
            target: "faq_rag::search",
            query = %ctx.normalized,
            intent = %ctx.intent,
            hits = top.len(),
            top_score = top.first().map(|r| r.score).unwrap_or_default(),
            "search complete"
        );
        top
    }

    /// Score every record, clamp, and sort descending (ties keep corpus order).
    fn rank_all(&self, ctx: &QueryContext) -> Vec<ScoredResult> {
        let query_embedding = embed(&ctx.normalized);

        let mut scored: Vec<ScoredResult> = self
            .documents()
            .iter()
            .zip(self.embeddings())
            .enumerate()
            .map(|(index, (record, embedding))| {
                let base = similarity(&query_embedding, embedding);
                let boost = total_boost(ctx, &RecordView::new(record));
                ScoredResult {
                    index,
                    score: (base + boost).min(1.0),
                    record: record.clone(),
                }
            })
            .collect();

        sort_desc(&mut scored);
        scored
    }
}

fn sort_desc(results: &mut [ScoredResult]) {
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
}

/// Ensure `top` contains at least one record about `line` when `ranked` has
/// one: the best corroborating record of the (sorted) `ranked` list replaces
/// the last entry of `top`.
///
/// Returns whether a substitution happened.
pub fn backfill(top: &mut Vec<ScoredResult>, ranked: &[ScoredResult], line: ProductLine) -> bool {
    if top.is_empty() || top.iter().any(|r| r.record.corroborates(line)) {
        return false;
    }

    // `ranked` is sorted, so the first match is the best one.
    let Some(best) = ranked.iter().find(|r| r.record.corroborates(line)) else {
        return false;
    };

    let evicted = top.pop();
    debug!(
        target: "faq_rag::search",
        line = %line,
        inserted = best.index,
        evicted = evicted.as_ref().map(|r| r.index),
        "backfill: product line missing from top results"
    );
    top.push(best.clone());
    sort_desc(top);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::record::{Record, RecordKind};

    fn scored(index: usize, score: f32, content: &str, kind: RecordKind) -> ScoredResult {
        ScoredResult {
            index,
            score,
            record: Record::new(content, "GENERAL", kind),
        }
    }

    #[test]
    fn backfill_replaces_last_and_resorts() {
        let ranked = vec![
            scored(0, 0.9, "Welcome", RecordKind::Heading),
            scored(1, 0.8, "Our story", RecordKind::Heading),
            scored(2, 0.7, "Team", RecordKind::Heading),
            scored(3, 0.4, "Doctors and clinics", RecordKind::HealthDescription),
            scored(4, 0.2, "More health", RecordKind::HealthDescription),
        ];
        let mut top = ranked[..3].to_vec();

        assert!(backfill(&mut top, &ranked, ProductLine::Health));
        let idx: Vec<_> = top.iter().map(|r| r.index).collect();
        assert_eq!(idx, vec![0, 1, 3]);
    }

    #[test]
    fn backfill_is_noop_when_covered_or_absent() {
        let ranked = vec![
            scored(0, 0.9, "Welcome", RecordKind::Heading),
            scored(1, 0.5, "Car plans", RecordKind::AutoDescription),
        ];
        let mut top = ranked.clone();
        assert!(!backfill(&mut top, &ranked, ProductLine::Auto));
        assert!(!backfill(&mut top, &ranked, ProductLine::Life));
        assert_eq!(top.len(), 2);

        let mut empty = Vec::new();
        assert!(!backfill(&mut empty, &ranked, ProductLine::Auto));
    }

    #[test]
    fn search_respects_k_and_order() {
        let store = CorpusStore::from_text(
            "=== SECTION: SERVICES ===\n# Coverage\n## Auto Insurance\nAuto policies with roadside help.\n- Rental cars\n",
        );
        for k in 0..=8 {
            let hits = store.search("roadside help for my car", k);
            assert!(hits.len() <= k);
            assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
            assert!(hits.iter().all(|h| h.score <= 1.0 && h.score >= 0.0));
        }
    }

    #[test]
    fn empty_store_returns_nothing() {
        assert!(CorpusStore::empty().search("health insurance", 3).is_empty());
    }

    #[test]
    fn ties_keep_corpus_order() {
        let store = CorpusStore::from_records(vec![
            Record::new("alpha", "X", RecordKind::Paragraph),
            Record::new("bravo", "X", RecordKind::Paragraph),
            Record::new("charlie", "X", RecordKind::Paragraph),
        ]);
        let hits = store.search("zulu", 3);
        let idx: Vec<_> = hits.iter().map(|h| h.index).collect();
        assert_eq!(idx, vec![0, 1, 2]);
    }
}
