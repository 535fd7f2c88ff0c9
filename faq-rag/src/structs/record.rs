//! Corpus data types: records, their closed set of kinds, and product lines.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Structural/semantic tag of a corpus record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    Heading,
    Subheading,
    Service,
    ListItem,
    Feature,
    Quote,
    Testimonial,
    Paragraph,
    HealthDescription,
    AutoDescription,
    HomeDescription,
    LifeDescription,
    ContactInfo,
    InsuranceTypesOverview,
}

impl RecordKind {
    /// Wire/tag name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Heading => "heading",
            RecordKind::Subheading => "subheading",
            RecordKind::Service => "service",
            RecordKind::ListItem => "list-item",
            RecordKind::Feature => "feature",
            RecordKind::Quote => "quote",
            RecordKind::Testimonial => "testimonial",
            RecordKind::Paragraph => "paragraph",
            RecordKind::HealthDescription => "health-description",
            RecordKind::AutoDescription => "auto-description",
            RecordKind::HomeDescription => "home-description",
            RecordKind::LifeDescription => "life-description",
            RecordKind::ContactInfo => "contact-info",
            RecordKind::InsuranceTypesOverview => "insurance-types-overview",
        }
    }

    /// `heading` or `subheading`.
    pub fn is_heading_like(&self) -> bool {
        matches!(self, RecordKind::Heading | RecordKind::Subheading)
    }

    /// One of the four `*-description` kinds.
    pub fn is_description(&self) -> bool {
        matches!(
            self,
            RecordKind::HealthDescription
                | RecordKind::AutoDescription
                | RecordKind::HomeDescription
                | RecordKind::LifeDescription
        )
    }

    /// `list-item` or `feature`.
    pub fn is_list_like(&self) -> bool {
        matches!(self, RecordKind::ListItem | RecordKind::Feature)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four insurance product lines the agency sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductLine {
    Health,
    Auto,
    Home,
    Life,
}

impl ProductLine {
    pub const ALL: [ProductLine; 4] = [
        ProductLine::Health,
        ProductLine::Auto,
        ProductLine::Home,
        ProductLine::Life,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductLine::Health => "health",
            ProductLine::Auto => "auto",
            ProductLine::Home => "home",
            ProductLine::Life => "life",
        }
    }

    /// The `*-description` record kind for this line.
    pub fn description_kind(&self) -> RecordKind {
        match self {
            ProductLine::Health => RecordKind::HealthDescription,
            ProductLine::Auto => RecordKind::AutoDescription,
            ProductLine::Home => RecordKind::HomeDescription,
            ProductLine::Life => RecordKind::LifeDescription,
        }
    }
}

impl fmt::Display for ProductLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed unit of site content. Immutable once it is in a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub content: String,
    pub section: String,
    #[serde(rename = "type")]
    pub kind: RecordKind,
}

impl Record {
    pub fn new(content: impl Into<String>, section: impl Into<String>, kind: RecordKind) -> Self {
        Self {
            content: content.into(),
            section: section.into(),
            kind,
        }
    }

    /// Whether this record speaks about `line`: its kind names the line, or it
    /// sits in a services section and its text mentions the line by name.
    pub fn corroborates(&self, line: ProductLine) -> bool {
        self.kind.as_str().contains(line.as_str())
            || (self.section.to_lowercase().contains("service")
                && self.content.to_lowercase().contains(line.as_str()))
    }
}
