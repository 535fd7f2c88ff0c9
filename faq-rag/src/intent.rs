//! Coarse query classification by ordered regex matchers.
//!
//! Both classifiers are pure functions of the lowercased query. Matchers are
//! evaluated in table order; the first hit wins.

use std::fmt;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::structs::record::ProductLine;

/// Topical purpose of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "insuranceType", rename_all = "lowercase")]
pub enum QueryIntent {
    Insurance(ProductLine),
    Contact,
    Quote,
    Agent,
    Company,
    Claim,
    General,
}

impl QueryIntent {
    /// The product line named by an `insurance` intent.
    pub fn product_line(&self) -> Option<ProductLine> {
        match self {
            QueryIntent::Insurance(line) => Some(*line),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryIntent::Insurance(_) => "insurance",
            QueryIntent::Contact => "contact",
            QueryIntent::Quote => "quote",
            QueryIntent::Agent => "agent",
            QueryIntent::Company => "company",
            QueryIntent::Claim => "claim",
            QueryIntent::General => "general",
        }
    }
}

impl fmt::Display for QueryIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leading question word of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    What,
    How,
    Where,
    When,
    Who,
    Why,
    Can,
    Do,
    Other,
}

pub(crate) fn ci(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("static pattern compiles")
}

static INTENT_MATCHERS: LazyLock<Vec<(Regex, QueryIntent)>> = LazyLock::new(|| {
    vec![
        (
            ci("health|medical|doctor|hospital|illness|sick|prescription|wellness|healthcare"),
            QueryIntent::Insurance(ProductLine::Health),
        ),
        (
            ci("auto|car|vehicle|driving|accident|collision|comprehensive|liability|roadside"),
            QueryIntent::Insurance(ProductLine::Auto),
        ),
        (
            ci("home|house|property|apartment|condo|dwelling|residence|building|landlord|renter"),
            QueryIntent::Insurance(ProductLine::Home),
        ),
        (
            ci("life|death|beneficiary|family protection|funeral|term|whole life|universal|estate planning"),
            QueryIntent::Insurance(ProductLine::Life),
        ),
        (
            ci("contact|phone|email|address|location|office|reach|get in touch|call|visit|hours"),
            QueryIntent::Contact,
        ),
        (
            ci("quote|get a quote|price|cost|how much|premium|estimate|calculator|pricing|rates"),
            QueryIntent::Quote,
        ),
        (
            ci("agent|advisor|representative|specialist|expert|consultant|broker"),
            QueryIntent::Agent,
        ),
        (
            ci(r"about (acme|the company)|company (history|background|info)|how long|who is acme|tell me about|mission|values"),
            QueryIntent::Company,
        ),
        (
            ci(r"claim|file a claim|report (accident|damage|loss)|claims process|how to (file|submit|make) a claim"),
            QueryIntent::Claim,
        ),
    ]
});

static QUESTION_MATCHERS: LazyLock<Vec<(Regex, QuestionType)>> = LazyLock::new(|| {
    vec![
        (ci(r"^what\b|what is|what are|what type|what kind"), QuestionType::What),
        (ci(r"^how\b|how do|how can|how does|how to"), QuestionType::How),
        (ci(r"^where\b|where is|where can|where do|where should"), QuestionType::Where),
        (ci(r"^when\b|when is|when can|when do|when will"), QuestionType::When),
        (ci(r"^who\b|who is|who are|who can|who should"), QuestionType::Who),
        (ci(r"^why\b|why is|why are|why do|why should"), QuestionType::Why),
        (ci(r"^can\b|can i|can you|can we|can they"), QuestionType::Can),
        (ci(r"^do\b|^does\b|do i|does it|do you"), QuestionType::Do),
    ]
});

/// Classify the topical intent of `query`.
pub fn classify_intent(query: &str) -> QueryIntent {
    let q = query.to_lowercase();
    INTENT_MATCHERS
        .iter()
        .find(|(re, _)| re.is_match(&q))
        .map(|(_, intent)| *intent)
        .unwrap_or(QueryIntent::General)
}

/// Classify the leading question word of `query`.
pub fn classify_question_type(query: &str) -> QuestionType {
    let q = query.trim().to_lowercase();
    QUESTION_MATCHERS
        .iter()
        .find(|(re, _)| re.is_match(&q))
        .map(|(_, kind)| *kind)
        .unwrap_or(QuestionType::Other)
}
