//! Additive re-ranking boosts.
//!
//! Every rule is an independent pure function of the query context and one
//! record; the ranker sums [`BOOST_RULES`] in table order on top of the base
//! similarity. Adding a rule means adding a row, not touching the ranker.

use crate::intent::{QueryIntent, QuestionType, classify_intent, classify_question_type};
use crate::lexicon::{
    AGENT_TERMS, COMPANY_TERMS, CONTACT_TERMS, INSURANCE_TERMS, QUOTE_TERMS, line_terms,
    mentions_any,
};
use crate::structs::record::{Record, RecordKind};

/// Cap for the summed literal keyword overlap boost.
pub const KEYWORD_BOOST_CAP: f32 = 0.4;

/// Everything the rules need to know about the query, computed once per search.
#[derive(Debug, Clone)]
pub struct QueryContext {
    /// Lowercased and trimmed query.
    pub normalized: String,
    pub intent: QueryIntent,
    pub question: QuestionType,
    pub wants_contact: bool,
    pub wants_quote: bool,
    pub wants_agent: bool,
    pub wants_company: bool,
}

impl QueryContext {
    pub fn new(query: &str) -> Self {
        let normalized = query.trim().to_lowercase();
        Self {
            intent: classify_intent(&normalized),
            question: classify_question_type(&normalized),
            wants_contact: mentions_any(&normalized, CONTACT_TERMS),
            wants_quote: mentions_any(&normalized, QUOTE_TERMS),
            wants_agent: mentions_any(&normalized, AGENT_TERMS),
            wants_company: mentions_any(&normalized, COMPANY_TERMS),
            normalized,
        }
    }

    /// Whitespace-separated query tokens (punctuation kept).
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.normalized.split_whitespace()
    }
}

/// A record with its lowercased fields, computed once per record per search.
#[derive(Debug)]
pub struct RecordView<'a> {
    pub record: &'a Record,
    pub content: String,
    pub section: String,
}

impl<'a> RecordView<'a> {
    pub fn new(record: &'a Record) -> Self {
        Self {
            record,
            content: record.content.to_lowercase(),
            section: record.section.to_lowercase(),
        }
    }

    fn kind(&self) -> RecordKind {
        self.record.kind
    }
}

pub type BoostFn = fn(&QueryContext, &RecordView<'_>) -> f32;

/// A named boost rule.
#[derive(Debug, Clone, Copy)]
pub struct BoostRule {
    pub name: &'static str,
    pub apply: BoostFn,
}

/// The ranker's boosts, applied in this order and summed.
pub const BOOST_RULES: &[BoostRule] = &[
    BoostRule { name: "keyword-overlap", apply: keyword_overlap },
    BoostRule { name: "question-type", apply: question_type },
    BoostRule { name: "product-line", apply: product_line },
    BoostRule { name: "contact", apply: contact_topic },
    BoostRule { name: "quote", apply: quote_topic },
    BoostRule { name: "agent", apply: agent_topic },
    BoostRule { name: "company", apply: company_topic },
    BoostRule { name: "record-kind", apply: record_kind },
];

/// Sum of all rules for one record.
pub fn total_boost(ctx: &QueryContext, view: &RecordView<'_>) -> f32 {
    BOOST_RULES.iter().map(|rule| (rule.apply)(ctx, view)).sum()
}

fn keyword_weight(token: &str) -> f32 {
    if INSURANCE_TERMS.contains(&token) {
        0.15
    } else if CONTACT_TERMS.contains(&token)
        || QUOTE_TERMS.contains(&token)
        || AGENT_TERMS.contains(&token)
    {
        0.12
    } else if COMPANY_TERMS.contains(&token) {
        0.10
    } else {
        0.08
    }
}

/// Query tokens longer than three chars found verbatim in the content.
pub fn keyword_overlap(ctx: &QueryContext, view: &RecordView<'_>) -> f32 {
    let sum: f32 = ctx
        .tokens()
        .filter(|t| t.chars().count() > 3 && view.content.contains(t))
        .map(keyword_weight)
        .sum();
    sum.min(KEYWORD_BOOST_CAP)
}

pub fn question_type(ctx: &QueryContext, view: &RecordView<'_>) -> f32 {
    let kind = view.kind();
    match ctx.question {
        QuestionType::What
            if kind.is_heading_like() || kind.is_description() || kind == RecordKind::Service =>
        {
            0.15
        }
        QuestionType::How
            if mentions_any(&view.content, &["how", "process", "steps"])
                || kind.is_description() =>
        {
            0.15
        }
        QuestionType::Where
            if kind == RecordKind::ContactInfo
                || view.section.contains("contact")
                || mentions_any(&view.content, &["location", "address"]) =>
        {
            0.2
        }
        QuestionType::Who
            if view.section.contains("agent")
                || view.section.contains("about")
                || mentions_any(&view.content, &["agent", "company"]) =>
        {
            0.2
        }
        _ => 0.0,
    }
}

pub fn product_line(ctx: &QueryContext, view: &RecordView<'_>) -> f32 {
    let Some(line) = ctx.intent.product_line() else {
        return 0.0;
    };
    let kind = view.kind();
    let matches = kind == line.description_kind()
        || kind.as_str().contains(line.as_str())
        || (view.section.contains("service") && mentions_any(&view.content, line_terms(line)));
    if matches { 0.35 } else { 0.0 }
}

pub fn contact_topic(ctx: &QueryContext, view: &RecordView<'_>) -> f32 {
    let matches = view.kind() == RecordKind::ContactInfo
        || view.section.contains("contact")
        || mentions_any(&view.content, CONTACT_TERMS);
    if ctx.wants_contact && matches { 0.35 } else { 0.0 }
}

pub fn quote_topic(ctx: &QueryContext, view: &RecordView<'_>) -> f32 {
    let matches = mentions_any(&view.content, &["quote", "price", "cost", "premium"]);
    if ctx.wants_quote && matches { 0.3 } else { 0.0 }
}

pub fn agent_topic(ctx: &QueryContext, view: &RecordView<'_>) -> f32 {
    let matches = view.section.contains("agent")
        || mentions_any(&view.content, &["agent", "advisor", "representative"]);
    if ctx.wants_agent && matches { 0.3 } else { 0.0 }
}

pub fn company_topic(ctx: &QueryContext, view: &RecordView<'_>) -> f32 {
    let matches = view.section.contains("about")
        || mentions_any(&view.content, &["company", "acme", "mission"]);
    if ctx.wants_company && matches { 0.3 } else { 0.0 }
}

pub fn record_kind(_ctx: &QueryContext, view: &RecordView<'_>) -> f32 {
    match view.kind() {
        RecordKind::Heading => 0.2,
        RecordKind::Subheading => 0.15,
        RecordKind::Service => 0.25,
        RecordKind::InsuranceTypesOverview => 0.3,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    fn rec(content: &str, section: &str, kind: RecordKind) -> Record {
        Record::new(content, section, kind)
    }

    #[test]
    fn keyword_overlap_tiers_and_cap() {
        let r = rec("health plans and the office hours", "x", RecordKind::Paragraph);
        let v = RecordView::new(&r);

        assert!(approx(keyword_overlap(&QueryContext::new("health"), &v), 0.15));
        assert!(approx(keyword_overlap(&QueryContext::new("office"), &v), 0.12));
        assert!(approx(keyword_overlap(&QueryContext::new("plans"), &v), 0.08));
        // short tokens never count
        assert!(approx(keyword_overlap(&QueryContext::new("and the"), &v), 0.0));

        let many = QueryContext::new("health office hours plans health");
        assert!(approx(keyword_overlap(&many, &v), KEYWORD_BOOST_CAP));
    }

    #[test]
    fn question_type_boosts() {
        let heading = rec("Our Plans", "SERVICES", RecordKind::Heading);
        let contact = rec("Call us", "CONTACT", RecordKind::Paragraph);
        let about = rec("Founded in 2001", "ABOUT", RecordKind::Paragraph);

        let what = QueryContext::new("what plans exist");
        assert!(approx(question_type(&what, &RecordView::new(&heading)), 0.15));
        assert!(approx(question_type(&what, &RecordView::new(&contact)), 0.0));

        let where_q = QueryContext::new("where are you");
        assert!(approx(question_type(&where_q, &RecordView::new(&contact)), 0.2));

        let who = QueryContext::new("who runs this");
        assert!(approx(question_type(&who, &RecordView::new(&about)), 0.2));

        let when = QueryContext::new("when are you open");
        assert!(approx(question_type(&when, &RecordView::new(&heading)), 0.0));
    }

    #[test]
    fn how_questions_lift_process_text() {
        let ctx = QueryContext::new("how do I file a claim");
        assert_eq!(ctx.question, QuestionType::How);

        let steps = rec("Our claims process takes three steps.", "CLAIMS", RecordKind::Paragraph);
        let history = rec("Founded in 2001", "ABOUT", RecordKind::Paragraph);
        let steps = RecordView::new(&steps);
        let history = RecordView::new(&history);

        assert!(approx(question_type(&ctx, &steps), 0.15));
        assert!(approx(question_type(&ctx, &history), 0.0));
        assert!(total_boost(&ctx, &steps) > total_boost(&ctx, &history));
    }

    #[test]
    fn product_line_boost_uses_kind_or_services_content() {
        let ctx = QueryContext::new("is my car covered");
        let desc = rec("Auto coverage", "SERVICES", RecordKind::AutoDescription);
        let feature = rec("Vehicle replacement", "SERVICES", RecordKind::Feature);
        let other = rec("Vehicle replacement", "FAQ", RecordKind::Paragraph);
        assert!(approx(product_line(&ctx, &RecordView::new(&desc)), 0.35));
        assert!(approx(product_line(&ctx, &RecordView::new(&feature)), 0.35));
        assert!(approx(product_line(&ctx, &RecordView::new(&other)), 0.0));

        let general = QueryContext::new("tell me more");
        assert!(approx(product_line(&general, &RecordView::new(&desc)), 0.0));
    }

    #[test]
    fn topical_boosts_need_both_sides() {
        let r = rec("Our agent will send a price quote", "x", RecordKind::Paragraph);
        let v = RecordView::new(&r);
        assert!(approx(quote_topic(&QueryContext::new("what is the cost"), &v), 0.3));
        assert!(approx(quote_topic(&QueryContext::new("hello there"), &v), 0.0));
        assert!(approx(agent_topic(&QueryContext::new("find a broker"), &v), 0.3));
        assert!(approx(contact_topic(&QueryContext::new("phone"), &v), 0.0));
        assert!(approx(company_topic(&QueryContext::new("your history"), &v), 0.0));
    }

    #[test]
    fn kind_boosts_are_unconditional() {
        let ctx = QueryContext::new("zzz");
        let overview = rec("all lines", "SERVICES", RecordKind::InsuranceTypesOverview);
        assert!(approx(record_kind(&ctx, &RecordView::new(&overview)), 0.3));
        assert!(approx(total_boost(&ctx, &RecordView::new(&overview)), 0.3));
    }

    #[test]
    fn rule_table_order_is_fixed() {
        let names: Vec<_> = BOOST_RULES.iter().map(|r| r.name).collect();
        assert_eq!(names.first(), Some(&"keyword-overlap"));
        assert_eq!(names.last(), Some(&"record-kind"));
        assert_eq!(names.len(), 8);
    }
}
