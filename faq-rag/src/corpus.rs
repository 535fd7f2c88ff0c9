//! Corpus store: parsing of the line-oriented site text into typed records
//! and the parallel sequence of embeddings.
//!
//! Text convention (one unit per line, blank lines ignored):
//! - `=== SECTION: NAME ===` / `=== FOOTER ... ===` switch the current section
//! - `#`, `##`, ... headings
//! - `- item` list items
//! - `"quoted"` lines
//! - anything else is a paragraph
//!
//! Parsing is total: every line maps to a record kind or is skipped.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use crate::embedding::{Embedding, embed};
use crate::structs::agency_profile::AgencyProfile;
use crate::structs::record::{ProductLine, Record, RecordKind};

const UNKNOWN_SECTION: &str = "unknown";
const FOOTER_SECTION: &str = "footer";

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\d{3}\)\s*\d{3}-\d{4}").expect("phone pattern"));
static STREET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\s+[A-Za-z]+\s+St").expect("street pattern"));

/// Ordered records with one embedding per record (`embeddings[i]` belongs to
/// `documents[i]`). Built once; rebuilt wholesale, never edited.
#[derive(Debug, Clone, Default)]
pub struct CorpusStore {
    documents: Vec<Record>,
    embeddings: Vec<Embedding>,
}

impl CorpusStore {
    /// A store with no records; every search on it returns nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse site text, appending the default agency's overview record.
    pub fn from_text(text: &str) -> Self {
        Self::from_text_with_overview(text, &AgencyProfile::default().overview_sentence())
    }

    /// Parse site text and append a synthetic overview record with `overview`.
    ///
    /// Empty or whitespace-only text yields an empty store (no overview).
    pub fn from_text_with_overview(text: &str, overview: &str) -> Self {
        if text.trim().is_empty() {
            info!(
                target: "faq_rag::corpus",
                "from_text: corpus text is empty, store stays empty"
            );
            return Self::empty();
        }
        let documents = parse_corpus_text(text, overview);
        Self::from_parsed(documents)
    }

    /// Build a store from ready-made records. No overview record is added;
    /// records with blank content are dropped.
    pub fn from_records(records: Vec<Record>) -> Self {
        let documents = records
            .into_iter()
            .filter(|r| !r.content.trim().is_empty())
            .collect();
        Self::from_parsed(documents)
    }

    fn from_parsed(documents: Vec<Record>) -> Self {
        let embeddings: Vec<Embedding> = documents.iter().map(|d| embed(&d.content)).collect();
        info!(
            target: "faq_rag::corpus",
            records = documents.len(),
            "corpus store built"
        );
        Self {
            documents,
            embeddings,
        }
    }

    pub fn documents(&self) -> &[Record] {
        &self.documents
    }

    pub fn embeddings(&self) -> &[Embedding] {
        &self.embeddings
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn record(&self, index: usize) -> Option<&Record> {
        self.documents.get(index)
    }

    /// Records of one section, in corpus order.
    pub fn section<'a>(&'a self, section: &'a str) -> impl Iterator<Item = &'a Record> + 'a {
        self.documents.iter().filter(move |d| d.section == section)
    }
}

/// Parse the structured text into records and append the overview record.
pub fn parse_corpus_text(text: &str, overview: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let mut current_section = UNKNOWN_SECTION.to_string();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(section) = section_marker(line) {
            debug!(
                target: "faq_rag::corpus",
                section = %section,
                "processing section"
            );
            current_section = section;
            continue;
        }

        if let Some(record) = parse_line(line, &current_section) {
            records.push(record);
        }
    }

    records.push(Record::new(
        overview,
        "SERVICES",
        RecordKind::InsuranceTypesOverview,
    ));

    debug!(
        target: "faq_rag::corpus",
        records = records.len(),
        "parse_corpus_text: finished"
    );
    records
}

/// `=== SECTION: X ===` → `X`; `=== FOOTER ... ===` → `footer ...`.
fn section_marker(line: &str) -> Option<String> {
    if !(line.starts_with("=== SECTION:") || line.starts_with("=== FOOTER")) {
        return None;
    }
    let name = line
        .replacen("=== SECTION:", "", 1)
        .replacen("=== FOOTER", FOOTER_SECTION, 1)
        .replacen("===", "", 1);
    Some(name.trim().to_string())
}

fn parse_line(line: &str, section: &str) -> Option<Record> {
    let section_lc = section.to_lowercase();

    if line.starts_with('#') {
        let level = line.chars().take_while(|c| *c == '#').count();
        let text = line.trim_start_matches('#').trim();
        if text.is_empty() {
            return None;
        }
        let kind = if section_lc.contains("service") && is_service_title(text) {
            RecordKind::Service
        } else if level == 1 {
            RecordKind::Heading
        } else {
            RecordKind::Subheading
        };
        return Some(Record::new(text, section, kind));
    }

    if let Some(rest) = line.strip_prefix('-') {
        let text = rest.trim();
        if text.is_empty() {
            return None;
        }
        let kind = if section_lc.contains("about") || section_lc.contains("service") {
            RecordKind::Feature
        } else {
            RecordKind::ListItem
        };
        return Some(Record::new(text, section, kind));
    }

    if let Some(rest) = line.strip_prefix('"') {
        let text = rest.strip_suffix('"').unwrap_or(rest).trim();
        if text.is_empty() {
            return None;
        }
        let kind = if section_lc.contains("testimonial") {
            RecordKind::Testimonial
        } else {
            RecordKind::Quote
        };
        return Some(Record::new(text, section, kind));
    }

    Some(Record::new(line, section, paragraph_kind(line, section)))
}

fn is_service_title(text: &str) -> bool {
    text.contains("Insurance") || ["Health", "Auto", "Home", "Life"].contains(&text)
}

/// Paragraph retyping: product descriptions inside services sections, then
/// contact details inside contact/footer sections (which wins).
fn paragraph_kind(line: &str, section: &str) -> RecordKind {
    let section_lc = section.to_lowercase();
    let line_lc = line.to_lowercase();
    let mut kind = RecordKind::Paragraph;

    if section_lc.contains("service") {
        if let Some(line) = ProductLine::ALL
            .iter()
            .find(|l| line_lc.contains(l.as_str()))
        {
            kind = line.description_kind();
        }
    }

    if (section_lc.contains("contact") || section == FOOTER_SECTION)
        && (line.contains('@') || PHONE_RE.is_match(line) || STREET_RE.is_match(line))
    {
        kind = RecordKind::ContactInfo;
    }

    kind
}
