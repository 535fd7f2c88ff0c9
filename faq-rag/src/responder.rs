//! Response generator.
//!
//! A query is answered by the first matching entry of an ordered rule table
//! (scripted small talk, then broad topic templates). Anything else goes
//! through the ranker and is composed from the top result according to its
//! record kind, followed by a follow-up suggestion. Internal failures never
//! reach the caller: they are logged and replaced by a fixed apology.

use std::sync::{Arc, LazyLock};

use regex::{Regex, RegexBuilder};
use tracing::{debug, error};

use crate::corpus::CorpusStore;
use crate::errors::faq_rag_error::FaqRagError;
use crate::intent::{QueryIntent, ci, classify_intent};
use crate::structs::agency_profile::AgencyProfile;
use crate::structs::faq_config::SearchConfig;
use crate::structs::record::{ProductLine, Record, RecordKind};
use crate::structs::scored_result::ScoredResult;
use crate::suggestions::{SuggestionPicker, follow_up};
use crate::templates;

/// Minimum length of joined excerpts worth appending to a product template.
const MIN_EXCERPT_CHARS: usize = 20;
const MAX_EXCERPTS: usize = 3;

static PRAISE_RE: LazyLock<Regex> =
    LazyLock::new(|| ci("excellent|outstanding|amazing|great|good|best"));

/// What a matched rule replies with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Canned {
    Greeting,
    HowAreYou,
    Farewell,
    Thanks,
    InsuranceTypes,
    Contact,
    Quote,
    Agents,
    Company,
    Product(ProductLine),
    Claims,
}

#[derive(Debug)]
struct ReplyRule {
    name: &'static str,
    pattern: Regex,
    reply: Canned,
}

/// Build the rule table. Brand-specific alternatives use the profile's brand.
fn reply_rules(profile: &AgencyProfile) -> Result<Vec<ReplyRule>, FaqRagError> {
    let brand = regex::escape(&profile.brand.to_lowercase());
    let table: Vec<(&'static str, String, Canned)> = vec![
        ("greeting", r"^(hi|hello|hey|greetings)\b".into(), Canned::Greeting),
        ("how-are-you", r"^(how are you|how's it going)".into(), Canned::HowAreYou),
        ("farewell", r"^(bye|goodbye|see you)".into(), Canned::Farewell),
        ("thanks", r"^(thanks|thank you)".into(), Canned::Thanks),
        (
            "insurance-types",
            format!(
                r"what (types|kinds?|sort) of insurance|insurance (types|options|products|policies|plans|offerings)|what (insurance|policies|coverage) (do you|does {brand}) (have|offer|provide)"
            ),
            Canned::InsuranceTypes,
        ),
        (
            "contact",
            "contact|phone|email|address|location|office|reach|get in touch|call|visit|hours".into(),
            Canned::Contact,
        ),
        (
            "quote",
            "quote|get a quote|price|cost|how much|premium|estimate|calculator|pricing|rates".into(),
            Canned::Quote,
        ),
        (
            "agent",
            "agent|advisor|representative|specialist|expert|consultant|broker".into(),
            Canned::Agents,
        ),
        (
            "company",
            format!(
                r"about ({brand}|the company)|company (history|background|info)|how long|who is {brand}|tell me about ({brand}|the company|your company|you\b)|mission|values"
            ),
            Canned::Company,
        ),
        (
            "health",
            "health insurance|medical (coverage|insurance|plan)|healthcare|doctor|hospital|medical bills|prescription|wellness|preventive care|medical expenses".into(),
            Canned::Product(ProductLine::Health),
        ),
        (
            "auto",
            "auto insurance|car insurance|vehicle (coverage|insurance|protection)|automobile|driving|accident|collision|comprehensive|liability|roadside|car damage|vehicle policy".into(),
            Canned::Product(ProductLine::Auto),
        ),
        (
            "home",
            "home insurance|homeowners|property (coverage|insurance|protection)|house|apartment|condo|dwelling|residence|building|landlord|renter|tenant|property damage".into(),
            Canned::Product(ProductLine::Home),
        ),
        (
            "life",
            "life insurance|death benefit|beneficiary|term life|whole life|permanent life|universal life|family protection|funeral expenses|income replacement|estate planning".into(),
            Canned::Product(ProductLine::Life),
        ),
        (
            "claims",
            r"claim|file a claim|report (accident|damage|loss)|claims process|how to (file|submit|make) a claim".into(),
            Canned::Claims,
        ),
    ];

    table
        .into_iter()
        .map(|(name, pattern, reply)| {
            let pattern = RegexBuilder::new(&pattern).case_insensitive(true).build()?;
            Ok::<_, FaqRagError>(ReplyRule {
                name,
                pattern,
                reply,
            })
        })
        .collect()
}

/// Whether a record belongs in the excerpts of a product template.
fn excerpt_matches(line: ProductLine, record: &Record) -> bool {
    let content = record.content.to_lowercase();
    let section = record.section.to_lowercase();
    let content_hit = match line {
        ProductLine::Health => content.contains("health"),
        ProductLine::Auto => content.contains("auto") || content.contains("car"),
        ProductLine::Home => ["home", "house", "property"]
            .iter()
            .any(|t| content.contains(t)),
        ProductLine::Life => content.contains("life"),
    };
    content_hit
        || record.kind.as_str().contains(line.as_str())
        || section.contains(line.as_str())
}

/// Chat answer generator bound to one agency profile.
#[derive(Debug, Clone)]
pub struct Responder {
    profile: AgencyProfile,
    picker: Arc<dyn SuggestionPicker>,
    search: SearchConfig,
    rules: Arc<Vec<ReplyRule>>,
}

impl Responder {
    pub fn new(
        profile: AgencyProfile,
        picker: Arc<dyn SuggestionPicker>,
        search: SearchConfig,
    ) -> Result<Self, FaqRagError> {
        let rules = reply_rules(&profile)?;
        Ok(Self {
            profile,
            picker,
            search,
            rules: Arc::new(rules),
        })
    }

    /// Answer `query` against `store`. Never fails.
    pub fn respond(&self, store: &CorpusStore, query: &str) -> String {
        match self.try_respond(store, query) {
            Ok(reply) => reply,
            Err(err) => {
                error!(
                    target: "faq_rag::responder",
                    error = %err,
                    "response generation failed"
                );
                templates::apology(&self.profile)
            }
        }
    }

    /// Answer `query`, surfacing internal failures.
    pub fn try_respond(&self, store: &CorpusStore, query: &str) -> Result<String, FaqRagError> {
        let normalized = query.trim().to_lowercase();

        if let Some(rule) = self.rules.iter().find(|r| r.pattern.is_match(&normalized)) {
            debug!(
                target: "faq_rag::responder",
                rule = rule.name,
                "canned reply"
            );
            return Ok(self.canned(rule.reply, store));
        }

        let results = store.search(query, self.search.answer_top_k);
        let Some(top) = results.first() else {
            return Ok(templates::no_information(&self.profile));
        };

        if top.score < self.search.clarify_below {
            let intent = classify_intent(&normalized);
            debug!(
                target: "faq_rag::responder",
                score = top.score,
                intent = %intent,
                "top score below threshold, asking to clarify"
            );
            return Ok(self.clarification(intent));
        }

        let body = self.compose(store, top, &results)?;
        let suggestion = follow_up(&normalized, &self.profile, self.picker.as_ref());
        Ok(format!("{body}\n\n{suggestion}"))
    }

    fn canned(&self, reply: Canned, store: &CorpusStore) -> String {
        let p = &self.profile;
        match reply {
            Canned::Greeting => templates::greeting(p),
            Canned::HowAreYou => templates::how_are_you(),
            Canned::Farewell => templates::farewell(),
            Canned::Thanks => templates::thanks(),
            Canned::InsuranceTypes => templates::insurance_types(p),
            Canned::Contact => templates::contact(p),
            Canned::Quote => templates::quote(p),
            Canned::Agents => templates::agents(p),
            Canned::Company => templates::company(p),
            Canned::Product(line) => self.product_reply(line, store),
            Canned::Claims => templates::claims(p),
        }
    }

    fn product_reply(&self, line: ProductLine, store: &CorpusStore) -> String {
        let mut text = templates::product_intro(line, &self.profile);

        let excerpts = store
            .documents()
            .iter()
            .filter(|d| excerpt_matches(line, d) && !d.kind.is_heading_like())
            .take(MAX_EXCERPTS)
            .map(|d| d.content.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        if excerpts.chars().count() > MIN_EXCERPT_CHARS {
            text.push_str("\n\nAdditional information: ");
            text.push_str(&excerpts);
        }

        text.push_str("\n\n");
        text.push_str(templates::product_call_to_action(line));
        text
    }

    fn clarification(&self, intent: QueryIntent) -> String {
        match intent {
            QueryIntent::Insurance(line) => templates::clarify_product(line, &self.profile),
            QueryIntent::General => templates::clarify_general(),
            other => templates::clarify_topic(other.as_str(), &self.profile),
        }
    }

    /// Reply body built around the top result, by its record kind.
    fn compose(
        &self,
        store: &CorpusStore,
        top: &ScoredResult,
        results: &[ScoredResult],
    ) -> Result<String, FaqRagError> {
        let record = store
            .record(top.index)
            .ok_or(FaqRagError::RecordOutOfRange {
                index: top.index,
                len: store.len(),
            })?;
        let section = record.section.as_str();
        let siblings: Vec<&Record> = store.section(section).collect();

        let body = match record.kind {
            RecordKind::Service => compose_service(record, &siblings),
            RecordKind::Heading | RecordKind::Subheading => compose_heading(record, &siblings),
            RecordKind::ListItem | RecordKind::Feature => compose_feature(record, &siblings),
            RecordKind::Testimonial => compose_testimonial(record, &siblings),
            RecordKind::InsuranceTypesOverview => templates::overview_body(&record.content),
            _ => compose_default(record, &siblings, results),
        };
        Ok(body)
    }
}

fn compose_service(record: &Record, siblings: &[&Record]) -> String {
    let related: Vec<&Record> = siblings
        .iter()
        .copied()
        .filter(|d| matches!(d.kind, RecordKind::Service | RecordKind::Feature))
        .take(3)
        .collect();

    let mut text = format!(
        "{} This is part of our {} offerings.",
        record.content, record.section
    );
    if related.len() > 1 {
        let others = related
            .iter()
            .filter(|d| d.content != record.content)
            .map(|d| d.content.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        text.push_str(" Other related services include: ");
        text.push_str(&others);
    }
    text.push_str(" We provide comprehensive coverage tailored to your specific needs.");
    text
}

fn compose_heading(record: &Record, siblings: &[&Record]) -> String {
    let related: Vec<&Record> = siblings
        .iter()
        .copied()
        .filter(|d| d.kind == RecordKind::Paragraph || d.kind.is_list_like())
        .take(5)
        .collect();

    if related.is_empty() {
        return format!(
            "{}. Please contact us for more detailed information about this topic.",
            record.content
        );
    }

    let mut text = format!("{}:", record.content);
    let paragraphs: Vec<&str> = related
        .iter()
        .filter(|d| d.kind == RecordKind::Paragraph)
        .map(|d| d.content.as_str())
        .collect();
    if !paragraphs.is_empty() {
        text.push(' ');
        text.push_str(&paragraphs.join(" "));
    }

    let items: Vec<&str> = related
        .iter()
        .filter(|d| d.kind.is_list_like())
        .map(|d| d.content.as_str())
        .collect();
    if !items.is_empty() {
        text.push_str("\n\nKey points:");
        for item in items {
            text.push_str("\n• ");
            text.push_str(item);
        }
    }
    text
}

fn compose_feature(record: &Record, siblings: &[&Record]) -> String {
    let title = siblings.iter().find(|d| d.kind.is_heading_like());
    let related: Vec<&str> = siblings
        .iter()
        .filter(|d| d.kind.is_list_like() && d.content != record.content)
        .take(3)
        .map(|d| d.content.as_str())
        .collect();

    let mut text = format!("{} is one of our key features", record.content);
    if let Some(title) = title {
        text.push_str(&format!(" related to {}", title.content));
    }
    text.push_str(". This benefit is designed to provide you with additional peace of mind and protection.");
    if !related.is_empty() {
        text.push_str(&format!(
            " Other related features include: {}.",
            related.join(", ")
        ));
    }
    text
}

fn compose_testimonial(record: &Record, siblings: &[&Record]) -> String {
    let mut text = format!(
        "One of our satisfied customers says: \"{}\"",
        record.content
    );
    if let Some(context) = siblings.iter().find(|d| d.kind.is_heading_like()) {
        text.push_str(&format!(" regarding our {} services", context.content));
    }
    text.push_str(". We pride ourselves on customer satisfaction and personalized service.");
    if PRAISE_RE.is_match(&record.content) {
        text.push_str(" Would you like to experience this level of service yourself?");
    } else {
        text.push_str(" Would you like to learn more about the services mentioned?");
    }
    text
}

fn compose_default(record: &Record, siblings: &[&Record], results: &[ScoredResult]) -> String {
    let mut text = match siblings.iter().find(|d| d.kind == RecordKind::Heading) {
        Some(heading) => format!("Regarding {}: {}", heading.content, record.content),
        None => record.content.clone(),
    };

    let related: Vec<&str> = results
        .iter()
        .skip(1)
        .take(2)
        .filter(|r| !r.record.kind.is_heading_like())
        .map(|r| r.record.content.as_str())
        .collect();
    if !related.is_empty() {
        text.push_str("\n\nAdditional information: ");
        text.push_str(&related.join(" "));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestions::{FixedPicker, GENERIC_SUGGESTIONS};

    fn responder() -> Responder {
        Responder::new(
            AgencyProfile::default(),
            Arc::new(FixedPicker(1)),
            SearchConfig::default(),
        )
        .unwrap()
    }

    fn rule_for(r: &Responder, query: &str) -> Option<&'static str> {
        let q = query.to_lowercase();
        r.rules.iter().find(|rule| rule.pattern.is_match(&q)).map(|rule| rule.name)
    }

    #[test]
    fn rule_order_is_first_match_wins() {
        let r = responder();
        assert_eq!(rule_for(&r, "hey there"), Some("greeting"));
        assert_eq!(rule_for(&r, "they said hi"), None);
        assert_eq!(rule_for(&r, "How are you today"), Some("how-are-you"));
        assert_eq!(rule_for(&r, "what kinds of insurance do you sell"), Some("insurance-types"));
        assert_eq!(rule_for(&r, "what coverage does acme offer"), Some("insurance-types"));
        assert_eq!(rule_for(&r, "how much does health insurance cost"), Some("quote"));
        assert_eq!(rule_for(&r, "tell me about acme"), Some("company"));
        assert_eq!(rule_for(&r, "tell me about yourself"), None);
        assert_eq!(rule_for(&r, "Tell me about health insurance"), Some("health"));
        assert_eq!(rule_for(&r, "is a tenant covered"), Some("home"));
        assert_eq!(rule_for(&r, "term life options"), Some("life"));
        assert_eq!(rule_for(&r, "I need to report damage"), Some("claims"));
    }

    #[test]
    fn product_reply_appends_excerpts_and_cta() {
        let store = CorpusStore::from_records(vec![
            Record::new("Health Plans", "SERVICES", RecordKind::Heading),
            Record::new("Family health plans with low copays.", "SERVICES", RecordKind::HealthDescription),
            Record::new("Telehealth included.", "SERVICES", RecordKind::Feature),
        ]);
        let reply = responder().respond(&store, "tell me about health insurance");
        assert!(reply.starts_with("Our Health Insurance plans"));
        assert!(reply.contains(
            "\n\nAdditional information: Family health plans with low copays. Telehealth included."
        ));
        assert!(reply.ends_with(templates::product_call_to_action(ProductLine::Health)));
    }

    #[test]
    fn short_excerpts_are_not_appended() {
        let store = CorpusStore::from_records(vec![Record::new(
            "Auto plans.",
            "SERVICES",
            RecordKind::AutoDescription,
        )]);
        let reply = responder().respond(&store, "car insurance please");
        assert!(!reply.contains("Additional information"));
    }

    #[test]
    fn clarification_depends_on_intent() {
        let r = responder();
        let p = AgencyProfile::default();
        assert_eq!(
            r.clarification(QueryIntent::Insurance(ProductLine::Home)),
            templates::clarify_product(ProductLine::Home, &p)
        );
        assert_eq!(r.clarification(QueryIntent::Claim), templates::clarify_topic("claim", &p));
        assert_eq!(r.clarification(QueryIntent::General), templates::clarify_general());
    }

    #[test]
    fn heading_answer_lists_key_points() {
        let store = CorpusStore::from_records(vec![
            Record::new("Why Choose Us", "WHY", RecordKind::Heading),
            Record::new("We answer every call in person.", "WHY", RecordKind::Paragraph),
            Record::new("Local advisors", "WHY", RecordKind::ListItem),
            Record::new("Fast payouts", "WHY", RecordKind::ListItem),
        ]);
        let reply = responder().respond(&store, "why choose us");
        assert!(reply.starts_with(
            "Why Choose Us: We answer every call in person.\n\nKey points:\n• Local advisors\n• Fast payouts"
        ));
        assert!(reply.ends_with(GENERIC_SUGGESTIONS[1]));
    }

    fn top_of(store: &CorpusStore, index: usize) -> ScoredResult {
        ScoredResult {
            index,
            score: 1.0,
            record: store.record(index).unwrap().clone(),
        }
    }

    #[test]
    fn service_answer_lists_related_services() {
        let store = CorpusStore::from_records(vec![
            Record::new("Auto Insurance", "SERVICES", RecordKind::Service),
            Record::new("Roadside assistance", "SERVICES", RecordKind::Feature),
            Record::new("Home Insurance", "SERVICES", RecordKind::Service),
        ]);
        let top = top_of(&store, 0);
        let body = responder().compose(&store, &top, std::slice::from_ref(&top)).unwrap();
        assert_eq!(
            body,
            "Auto Insurance This is part of our SERVICES offerings. \
             Other related services include: Roadside assistance, Home Insurance \
             We provide comprehensive coverage tailored to your specific needs."
        );
    }

    #[test]
    fn feature_answer_names_section_title_and_siblings() {
        let store = CorpusStore::from_records(vec![
            Record::new("Why Choose Us", "WHY", RecordKind::Heading),
            Record::new("Local advisors", "WHY", RecordKind::ListItem),
            Record::new("Fast payouts", "WHY", RecordKind::ListItem),
        ]);
        let top = top_of(&store, 1);
        let body = responder().compose(&store, &top, std::slice::from_ref(&top)).unwrap();
        assert_eq!(
            body,
            "Local advisors is one of our key features related to Why Choose Us. \
             This benefit is designed to provide you with additional peace of mind and protection. \
             Other related features include: Fast payouts."
        );
    }

    #[test]
    fn overview_answer_lists_all_lines() {
        let store = CorpusStore::from_records(vec![Record::new(
            "We sell four lines.",
            "SERVICES",
            RecordKind::InsuranceTypesOverview,
        )]);
        let top = top_of(&store, 0);
        let body = responder().compose(&store, &top, std::slice::from_ref(&top)).unwrap();
        assert_eq!(body, templates::overview_body("We sell four lines."));
        assert!(body.starts_with("We sell four lines.\n\nWe offer four main types of insurance:"));
    }

    #[test]
    fn testimonial_answer_quotes_customer() {
        let store = CorpusStore::from_records(vec![
            Record::new("Happy Clients", "TESTIMONIALS", RecordKind::Subheading),
            Record::new("Great service from start to finish", "TESTIMONIALS", RecordKind::Testimonial),
        ]);
        let reply = responder().respond(&store, "great service from start to finish");
        assert!(reply.starts_with(
            "One of our satisfied customers says: \"Great service from start to finish\" regarding our Happy Clients services."
        ));
        assert!(reply.contains("experience this level of service yourself?"));
    }

    #[test]
    fn foreign_result_index_becomes_apology() {
        let store = CorpusStore::empty();
        let r = responder();
        let stray = ScoredResult {
            index: 7,
            score: 0.9,
            record: Record::new("x", "y", RecordKind::Paragraph),
        };
        let err = r.compose(&store, &stray, std::slice::from_ref(&stray)).unwrap_err();
        assert!(matches!(err, FaqRagError::RecordOutOfRange { index: 7, len: 0 }));
    }
}
