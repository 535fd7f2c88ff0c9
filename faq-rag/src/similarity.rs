//! Blended cosine/Jaccard similarity over sparse term weights.

use std::collections::BTreeSet;

use crate::embedding::{BIGRAM_SEPARATOR, Embedding};

const MATCH_BOOST: f32 = 1.2;
const BIGRAM_BOOST: f32 = 1.5;
const COSINE_WEIGHT: f32 = 0.7;
const JACCARD_WEIGHT: f32 = 0.3;

/// Score two embeddings.
///
/// Per key, both weights are scaled by a length factor
/// `min(2, 1 + (len - 3) * 0.1)`; the dot-product term additionally gets
/// ×1.2 when the key is present on both sides and ×1.5 for bigrams. The
/// result is `(0.7 * cosine + 0.3 * jaccard) * (0.8 + 0.2 * length_ratio)`.
///
/// Returns 0 when either side is empty. Not clamped; callers clamp. The
/// value is exactly symmetric in its arguments: keys are visited in sorted
/// order so the floating-point sums do not depend on map iteration.
pub fn similarity(a: &Embedding, b: &Embedding) -> f32 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let keys: BTreeSet<&str> = a.keys().chain(b.keys()).map(String::as_str).collect();

    let mut dot = 0.0_f32;
    let mut mag_a = 0.0_f32;
    let mut mag_b = 0.0_f32;
    let mut shared = 0usize;

    for key in &keys {
        let v1 = a.get(*key).copied().unwrap_or(0.0);
        let v2 = b.get(*key).copied().unwrap_or(0.0);
        let both = v1 > 0.0 && v2 > 0.0;
        if both {
            shared += 1;
        }

        let len_boost = length_boost(key);
        let bv1 = v1 * len_boost;
        let bv2 = v2 * len_boost;
        let match_boost = if both { MATCH_BOOST } else { 1.0 };
        let bigram_boost = if key.contains(BIGRAM_SEPARATOR) {
            BIGRAM_BOOST
        } else {
            1.0
        };

        dot += bv1 * bv2 * match_boost * bigram_boost;
        mag_a += bv1 * bv1;
        mag_b += bv2 * bv2;
    }

    let mag_a = mag_a.sqrt();
    let mag_b = mag_b.sqrt();
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    let cosine = dot / (mag_a * mag_b);
    let jaccard = shared as f32 / keys.len() as f32;
    let length_ratio = a.len().min(b.len()) as f32 / a.len().max(b.len()) as f32;

    (COSINE_WEIGHT * cosine + JACCARD_WEIGHT * jaccard) * (0.8 + 0.2 * length_ratio)
}

/// Longer keys weigh more, up to ×2. Keys shorter than 3 chars shrink.
fn length_boost(key: &str) -> f32 {
    let len = key.chars().count() as f32;
    (1.0 + (len - 3.0) * 0.1).min(2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::embed;
    use proptest::prelude::*;
    use std::collections::HashMap;

    #[test]
    fn empty_side_scores_zero() {
        let e = embed("auto insurance quote");
        assert_eq!(similarity(&e, &HashMap::new()), 0.0);
        assert_eq!(similarity(&HashMap::new(), &e), 0.0);
        assert_eq!(similarity(&HashMap::new(), &HashMap::new()), 0.0);
    }

    #[test]
    fn disjoint_maps_score_zero() {
        let a = embed("collision repairs");
        let b = embed("wellness visits");
        assert_eq!(similarity(&a, &b), 0.0);
    }

    #[test]
    fn identical_single_term() {
        // One shared key: cosine = 1.2, jaccard = 1, ratio = 1.
        let a = embed("premium");
        let s = similarity(&a, &a);
        assert!((s - (0.7 * 1.2 + 0.3)).abs() < 1e-5, "got {s}");
    }

    #[test]
    fn overlap_ranks_above_partial_overlap() {
        let q = embed("home insurance coverage");
        let close = embed("Home insurance coverage for every house");
        let far = embed("Auto insurance for every driver");
        assert!(similarity(&q, &close) > similarity(&q, &far));
    }

    #[test]
    fn length_boost_is_capped() {
        assert_eq!(length_boost("abc"), 1.0);
        assert_eq!(length_boost("a_very_long_bigram_key"), 2.0);
    }

    fn weights() -> impl Strategy<Value = Embedding> {
        prop::collection::hash_map("[a-z]{1,8}(_[a-z]{1,8})?", 0.1f32..3.0, 0..12)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_symmetric(a in weights(), b in weights()) {
            prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
        }

        #[test]
        fn prop_non_negative(a in weights(), b in weights()) {
            prop_assert!(similarity(&a, &b) >= 0.0);
        }
    }
}
