//! Sparse bag-of-words + bigram vectorizer.
//!
//! Text is lowercased, a fixed punctuation set is deleted (not replaced by a
//! space), short tokens and stopwords are dropped, and what remains is
//! accumulated into a term → weight map. Insurance vocabulary carries a higher
//! unigram weight, and every adjacent token pair adds an `a_b` bigram key.

use std::collections::HashMap;

use crate::lexicon::{domain_weight, is_stopword};

/// Sparse term weights. Keys are unigrams or `term1_term2` bigrams; a missing
/// key means weight 0 and no entry is ever stored with weight 0.
pub type Embedding = HashMap<String, f32>;

/// Separator used in bigram keys. Never survives in a unigram because it is
/// part of the stripped punctuation set.
pub const BIGRAM_SEPARATOR: char = '_';

const STRIPPED: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')',
];

const BIGRAM_WEIGHT: f32 = 0.5;
const BIGRAM_WEIGHT_DOMAIN: f32 = 0.8;

/// Lowercase and delete the stripped punctuation characters.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !STRIPPED.contains(c))
        .collect()
}

/// Tokens that survive normalization, the length filter, and stopwords.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|w| w.chars().count() > 2 && !is_stopword(w))
        .map(str::to_string)
        .collect()
}

/// Vectorize `text` into unigram and bigram weights.
pub fn embed(text: &str) -> Embedding {
    let words = tokenize(text);
    let mut weights: Embedding = HashMap::with_capacity(words.len() * 2);

    for word in &words {
        let w = domain_weight(word).unwrap_or(1.0);
        *weights.entry(word.clone()).or_insert(0.0) += w;
    }

    for pair in words.windows(2) {
        let boosted = domain_weight(&pair[0]).is_some() || domain_weight(&pair[1]).is_some();
        let w = if boosted {
            BIGRAM_WEIGHT_DOMAIN
        } else {
            BIGRAM_WEIGHT
        };
        let key = format!("{}{BIGRAM_SEPARATOR}{}", pair[0], pair[1]);
        *weights.entry(key).or_insert(0.0) += w;
    }

    weights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_stopword_only_text_yield_empty_map() {
        assert!(embed("").is_empty());
        assert!(embed("   ").is_empty());
        assert!(embed("you and me, to the").is_empty());
    }

    #[test]
    fn punctuation_is_deleted_not_spaced() {
        assert_eq!(normalize("E-mail (today)!"), "email today");
        // Apostrophes are outside the stripped set.
        assert_eq!(tokenize("don't"), vec!["don't".to_string()]);
    }

    #[test]
    fn domain_terms_and_bigrams_are_weighted() {
        let e = embed("Affordable health insurance");
        assert_eq!(e["affordable"], 1.0);
        assert_eq!(e["health"], 2.2);
        assert_eq!(e["insurance"], 2.5);
        assert_eq!(e["affordable_health"], 0.8);
        assert_eq!(e["health_insurance"], 0.8);
        assert_eq!(e.len(), 5);

        let plain = embed("friendly local people");
        assert_eq!(plain["friendly_local"], 0.5);
    }

    #[test]
    fn repeated_tokens_accumulate() {
        let e = embed("policy policy review");
        assert_eq!(e["policy"], 4.0);
        assert_eq!(e["policy_policy"], 0.8);
    }

    #[test]
    fn single_token_has_no_bigrams() {
        let e = embed("premium");
        assert_eq!(e.len(), 1);
        assert!(e.keys().all(|k| !k.contains(BIGRAM_SEPARATOR)));
    }

    #[test]
    fn keys_come_from_surviving_tokens() {
        let text = "Our agents answer every claim question quickly.";
        let tokens = tokenize(text);
        for key in embed(text).keys() {
            assert!(
                key.split(BIGRAM_SEPARATOR).all(|part| tokens.iter().any(|t| t == part)),
                "unexpected key {key}"
            );
        }
    }
}
