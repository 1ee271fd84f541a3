// file: src/scrape/document.rs
// description: immutable parsed page tree with tag/attribute query helpers
// reference: https://docs.rs/scraper

use crate::error::{PipelineError, Result};
use scraper::{ElementRef, Html, Selector};

/// Page markup era of a patent page. The international (WO) layout encodes
/// claims differently from the default US layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLayout {
    Us,
    International,
}

/// An immutable parsed patent page. Owned by one extraction pass and only
/// ever read through selector queries.
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    /// Parses raw markup into a queryable tree. html5ever recovers from tag
    /// soup, so this rejects only payloads with no element content at all.
    pub fn parse(markup: &str) -> Result<Self> {
        if markup.trim().is_empty() {
            return Err(PipelineError::Parse("empty payload".to_string()));
        }

        let html = Html::parse_document(markup);
        if html.root_element().children().next().is_none() {
            return Err(PipelineError::Parse(
                "payload produced no document tree".to_string(),
            ));
        }

        Ok(Self { html })
    }

    /// All elements matching `selector`, in document order. The selector
    /// borrow ends here; only the document backs the returned elements.
    pub fn select_all<'a>(&'a self, selector: &Selector) -> Vec<ElementRef<'a>> {
        self.html.select(selector).collect()
    }

    /// First element matching `selector`, if any.
    pub fn select_first<'a>(&'a self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.html.select(selector).next()
    }

    /// Whitespace-normalized text of the first match.
    pub fn first_text(&self, selector: &Selector) -> Option<String> {
        self.select_first(selector).map(|el| element_text(&el))
    }

    /// `content` attribute of the first matching element.
    pub fn meta_content(&self, selector: &Selector) -> Option<String> {
        self.select_first(selector)
            .and_then(|el| el.value().attr("content"))
            .map(|content| content.trim().to_string())
    }

    /// Raw `<title>` string, if the page has one.
    pub fn title_text(&self, selector: &Selector) -> Option<String> {
        self.first_text(selector).filter(|text| !text.is_empty())
    }
}

/// Joins an element's text nodes and collapses runs of whitespace.
pub fn element_text(el: &ElementRef<'_>) -> String {
    let raw = el.text().collect::<Vec<_>>().join(" ");
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
