//! Fixed vocabularies shared by the vectorizer, classifier, and ranker.

use crate::structs::record::ProductLine;

/// Function words and pronouns dropped before weighting.
pub const STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "is", "are", "was", "were", "be", "been", "being", "in",
    "on", "at", "to", "for", "with", "by", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "from", "up", "down", "of", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why", "how",
    "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor",
    "not", "only", "own", "same", "so", "than", "too", "very", "can", "will", "just", "should",
    "now", "i", "you", "he", "she", "we", "they", "me", "him", "her", "us", "them",
];

/// Insurance jargon and product names with their unigram weight.
pub const DOMAIN_TERMS: &[(&str, f32)] = &[
    ("insurance", 2.5),
    ("policy", 2.0),
    ("coverage", 2.0),
    ("premium", 1.8),
    ("deductible", 1.8),
    ("claim", 1.8),
    ("health", 2.2),
    ("medical", 2.0),
    ("auto", 2.2),
    ("car", 2.0),
    ("vehicle", 2.0),
    ("home", 2.2),
    ("house", 2.0),
    ("property", 2.0),
    ("life", 2.2),
    ("death", 1.8),
    ("beneficiary", 1.8),
    ("family", 1.5),
    ("protection", 1.8),
    ("quote", 2.0),
    ("price", 1.8),
    ("cost", 1.8),
    ("agent", 1.8),
    ("advisor", 1.8),
    ("contact", 1.8),
    ("service", 1.5),
    ("plan", 1.5),
    ("benefit", 1.5),
    ("acme", 2.0),
];

pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Weight of a domain term, if `token` is one.
pub fn domain_weight(token: &str) -> Option<f32> {
    DOMAIN_TERMS
        .iter()
        .find(|(term, _)| *term == token)
        .map(|(_, w)| *w)
}

// ── Ranker keyword families ─────────────────────────────────────────────────

pub const INSURANCE_TERMS: &[&str] = &[
    "health", "medical", "doctor", "hospital", "prescription", "wellness", "auto", "car",
    "vehicle", "driving", "collision", "comprehensive", "liability", "home", "house", "property",
    "dwelling", "apartment", "condo", "homeowner", "life", "death", "beneficiary", "term",
    "whole life", "family protection",
];

pub const CONTACT_TERMS: &[&str] = &[
    "contact", "phone", "call", "email", "address", "location", "office", "hours", "reach",
];

pub const QUOTE_TERMS: &[&str] = &[
    "quote", "price", "cost", "premium", "estimate", "offer", "rate", "pricing", "payment",
];

pub const AGENT_TERMS: &[&str] = &[
    "agent", "representative", "advisor", "expert", "consultant", "specialist", "broker",
];

pub const COMPANY_TERMS: &[&str] = &[
    "acme", "company", "about", "business", "history", "mission", "values",
];

/// Whether any family term occurs as a substring of `text`.
pub fn mentions_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| text.contains(t))
}

/// Content words that tie a record to a product line in the ranker.
pub fn line_terms(line: ProductLine) -> &'static [&'static str] {
    match line {
        ProductLine::Health => &["health"],
        ProductLine::Auto => &["auto", "car", "vehicle"],
        ProductLine::Home => &["home", "house", "property"],
        ProductLine::Life => &["life"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_terms_are_boosted_unigrams() {
        assert_eq!(domain_weight("insurance"), Some(2.5));
        assert_eq!(domain_weight("family"), Some(1.5));
        assert_eq!(domain_weight("umbrella"), None);
        assert!(DOMAIN_TERMS.iter().all(|(t, w)| !t.contains('_') && (1.5..=2.5).contains(w)));
    }

    #[test]
    fn stopwords_cover_pronouns() {
        for w in ["you", "they", "them", "the"] {
            assert!(is_stopword(w));
        }
        assert!(!is_stopword("policy"));
    }
}
