//! Builds corpus text from a rendered site page.
//!
//! Output follows the line convention [`crate::corpus`] parses: one section
//! marker per `<section>`, then its headings, paragraphs, list items and
//! service cards, and finally the footer block.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

struct PageSelectors {
    section: Selector,
    headings: Selector,
    paragraph: Selector,
    lists: Selector,
    list_item: Selector,
    service_card: Selector,
    card_title: Selector,
    footer: Selector,
    footer_logo: Selector,
    footer_contact: Selector,
}

impl PageSelectors {
    fn new() -> Self {
        Self {
            section: Selector::parse("section").expect("section selector"),
            headings: Selector::parse("h1, h2, h3, h4, h5, h6").expect("heading selector"),
            paragraph: Selector::parse("p").expect("paragraph selector"),
            lists: Selector::parse("ul, ol").expect("list selector"),
            list_item: Selector::parse("li").expect("list item selector"),
            service_card: Selector::parse(".service-card").expect("service card selector"),
            card_title: Selector::parse("h3").expect("card title selector"),
            footer: Selector::parse("#footer").expect("footer selector"),
            footer_logo: Selector::parse(".footer-logo").expect("footer logo selector"),
            footer_contact: Selector::parse(".footer-contact p").expect("footer contact selector"),
        }
    }
}

static SELECTORS: LazyLock<PageSelectors> = LazyLock::new(PageSelectors::new);

/// Visible text of an element with whitespace runs collapsed, so every unit
/// stays on one line.
fn text_of(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn first_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(text_of)
        .filter(|t| !t.is_empty())
}

/// Convert page HTML into structured corpus text.
pub fn build_corpus_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let sel = &*SELECTORS;
    let mut out: Vec<String> = Vec::new();
    let mut sections = 0usize;

    for section in document.select(&sel.section) {
        sections += 1;
        let id = section
            .value()
            .id()
            .filter(|id| !id.is_empty())
            .unwrap_or("unknown");
        out.push(format!("\n\n=== SECTION: {} ===\n", id.to_uppercase()));

        for heading in section.select(&sel.headings) {
            let text = text_of(heading);
            if !text.is_empty() {
                out.push(format!("# {text}"));
            }
        }

        for paragraph in section.select(&sel.paragraph) {
            let text = text_of(paragraph);
            if !text.is_empty() {
                out.push(text);
            }
        }

        for list in section.select(&sel.lists) {
            for item in list.select(&sel.list_item) {
                let text = text_of(item);
                if !text.is_empty() {
                    out.push(format!("- {text}"));
                }
            }
        }

        for card in section.select(&sel.service_card) {
            let title = first_text(card, &sel.card_title);
            let description = first_text(card, &sel.paragraph);
            if let (Some(title), Some(description)) = (title, description) {
                out.push(format!("## {title}\n{description}"));
            }
        }
    }

    if let Some(footer) = document.select(&sel.footer).next() {
        out.push("\n\n=== FOOTER ===\n".to_string());

        if let Some(logo) = footer.select(&sel.footer_logo).next() {
            if let Some(title) = first_text(logo, &sel.card_title) {
                out.push(format!("# {title}"));
            }
            if let Some(subtitle) = first_text(logo, &sel.paragraph) {
                out.push(subtitle);
            }
        }

        let contact: Vec<String> = footer
            .select(&sel.footer_contact)
            .map(text_of)
            .collect();
        if !contact.is_empty() {
            out.push("\n## Contact Information".to_string());
            out.extend(contact.into_iter().filter(|t| !t.is_empty()));
        }
    }

    debug!(
        target: "faq_rag::corpus",
        sections,
        lines = out.len(),
        "build_corpus_text: page converted"
    );
    out.join("\n")
}
