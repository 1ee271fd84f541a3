// file: src/extract/record.rs
// description: extracted patent record with defaults for absent fields
// reference: internal data structures

use crate::extract::fields;
use crate::scrape::{PageDocument, PageLayout};
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::debug;

/// The legal top-level classification alphabet. Order matters: it fixes the
/// one-hot slot layout of the feature vector.
pub const CLASS_ALPHABET: [char; 7] = ['B', 'C', 'D', 'E', 'F', 'G', 'H'];

/// Top-level patent classification. Codes outside the legal alphabet
/// collapse to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Section(char),
    Unknown,
}

impl Classification {
    /// First character of a raw classification code, if it is in the legal
    /// alphabet.
    pub fn from_code(code: &str) -> Self {
        code.chars()
            .next()
            .filter(|c| CLASS_ALPHABET.contains(c))
            .map(Self::Section)
            .unwrap_or(Self::Unknown)
    }

    pub fn letter(&self) -> Option<char> {
        match self {
            Self::Section(c) => Some(*c),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Section(c) => write!(f, "{}", c),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// All fields extracted from one patent page. Numeric fields default to 0
/// and the classification to `Unknown`; building a record from a parsed page
/// never fails.
#[derive(Debug, Clone, Serialize)]
pub struct PatentRecord {
    pub classification: Classification,
    pub num_applications: u32,
    pub patent_citations: u32,
    pub non_patent_citations: u32,
    pub num_claims: u32,
    pub num_similar_prior_art: u32,
    pub num_inventors: u32,
    pub claim_text: String,
    pub title: String,
    pub abstract_text: Option<String>,
    pub assignee: Option<String>,
    pub description: Option<String>,
    pub fee_payments: u32,
}

impl PatentRecord {
    /// Runs every field extractor over the page, substituting documented
    /// defaults for anything absent.
    pub fn from_document(doc: &PageDocument, layout: PageLayout) -> Self {
        let classification = fields::classification_code(doc)
            .map(|code| Classification::from_code(&code))
            .unwrap_or(Classification::Unknown);

        let citations = fields::citation_counts(doc);
        let (num_claims, claim_text) = fields::claims(doc, layout).unwrap_or((0, String::new()));

        let record = Self {
            classification,
            num_applications: fields::application_count(doc),
            patent_citations: citations.patent,
            non_patent_citations: citations.non_patent,
            num_claims,
            num_similar_prior_art: fields::similar_prior_art(doc).unwrap_or(0),
            num_inventors: fields::inventor_count(doc),
            claim_text,
            title: fields::title(doc).unwrap_or_default(),
            abstract_text: fields::abstract_text(doc),
            assignee: fields::original_assignee(doc),
            description: fields::description_text(doc),
            fee_payments: fields::fee_payment_count(doc),
        };

        debug!(
            "Extracted record: class={} claims={} citations={}/{} similar={} inventors={}",
            record.classification,
            record.num_claims,
            record.patent_citations,
            record.non_patent_citations,
            record.num_similar_prior_art,
            record.num_inventors
        );

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classification_from_code() {
        assert_eq!(Classification::from_code("G06F 17/30"), Classification::Section('G'));
        assert_eq!(Classification::from_code("A61K"), Classification::Unknown);
        assert_eq!(Classification::from_code(""), Classification::Unknown);
    }

    #[test]
    fn test_classification_display() {
        assert_eq!(Classification::Section('H').to_string(), "H");
        assert_eq!(Classification::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_empty_page_yields_all_defaults() {
        let doc = PageDocument::parse("<html><body><p>nothing</p></body></html>").unwrap();
        let record = PatentRecord::from_document(&doc, PageLayout::Us);

        assert_eq!(record.classification, Classification::Unknown);
        assert_eq!(record.num_applications, 0);
        assert_eq!(record.patent_citations, 0);
        assert_eq!(record.non_patent_citations, 0);
        assert_eq!(record.num_claims, 0);
        assert_eq!(record.num_similar_prior_art, 0);
        assert_eq!(record.num_inventors, 0);
        assert_eq!(record.claim_text, "");
        assert_eq!(record.title, "");
        assert_eq!(record.abstract_text, None);
    }

    #[test]
    fn test_full_page_extraction() {
        let markup = r#"<html><head>
            <title>US7948209B2 - Wireless charging system - Google Patents</title>
            <meta name="description" content="A charging pad.">
            <meta name="DC.date" scheme="dateSubmitted" content="2015-06-01">
            <meta name="DC.contributor" scheme="inventor" content="A. Inventor">
          </head><body>
            <span itemprop="Code">H02J 7/00</span>
            <meta itemprop="Leaf"><meta itemprop="Leaf">
            <h2>Patent Citations (5) Also Published As</h2>
            <section itemprop="claims">
              <span itemprop="count">3</span>
              <div class="claim-text">A charging pad comprising a coil.</div>
            </section>
            <table>
              <tr itemprop="similarDocuments"><td><time itemprop="publicationDate">2014-01-01</time></td></tr>
            </table>
          </body></html>"#;

        let doc = PageDocument::parse(markup).unwrap();
        let record = PatentRecord::from_document(&doc, PageLayout::Us);

        assert_eq!(record.classification, Classification::Section('H'));
        assert_eq!(record.num_applications, 2);
        assert_eq!(record.patent_citations, 5);
        assert_eq!(record.num_claims, 3);
        assert_eq!(record.num_similar_prior_art, 1);
        assert_eq!(record.num_inventors, 1);
        assert_eq!(record.title, "Wireless charging system");
        assert_eq!(record.abstract_text.as_deref(), Some("A charging pad."));
        assert_eq!(record.claim_text, "A charging pad comprising a coil.");
    }

    #[test]
    fn test_record_serializes_classification_as_string() {
        let doc = PageDocument::parse("<p>x</p>").unwrap();
        let record = PatentRecord::from_document(&doc, PageLayout::Us);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["classification"], "unknown");
    }
}
