// file: src/extract/fields.rs
// description: per-field extractors over a parsed patent page
// reference: css marker queries with scraper selectors

use crate::extract::selectors::*;
use crate::scrape::document::element_text;
use crate::scrape::{PageDocument, PageLayout};
use chrono::NaiveDate;
use tracing::debug;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TITLE_SEPARATOR: &str = " - ";

/// Citation counts read from section headings. Fields stay at zero when the
/// matching heading is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CitationCounts {
    pub patent: u32,
    pub non_patent: u32,
}

/// Raw classification code, e.g. "G06F 17/30". The newer layout renders a
/// sort-key span before each code span; when that secondary marker is
/// present the first `Code` occurrence is the sort key and the real code is
/// the second. The older layout has no sort keys and the first occurrence is
/// the code itself.
pub fn classification_code(doc: &PageDocument) -> Option<String> {
    let codes = doc.select_all(&CODE);
    let index = if doc.select_first(&CODE_SORT).is_some() && codes.len() > 1 {
        1
    } else {
        0
    };

    codes
        .get(index)
        .map(element_text)
        .filter(|text| !text.is_empty())
}

/// Number of leaf classification markers (potential applications).
pub fn application_count(doc: &PageDocument) -> u32 {
    doc.select_all(&LEAF).len() as u32
}

/// Reads patent and non-patent citation counts out of `h2` headings shaped
/// like "Patent Citations (12) ..." / "Non-Patent Citations (3) ...".
/// Headings with fewer than three tokens or an unparseable count are
/// skipped.
pub fn citation_counts(doc: &PageDocument) -> CitationCounts {
    let mut counts = CitationCounts::default();

    for heading in doc.select_all(&SECTION_HEADING) {
        let text = element_text(&heading);
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.len() < 3 {
            continue;
        }

        let parsed = words[2].trim_matches(|c| c == '(' || c == ')').parse::<u32>();
        match (words[0], parsed) {
            ("Patent", Ok(n)) => counts.patent = n,
            ("Non-Patent", Ok(n)) => counts.non_patent = n,
            _ => {}
        }
    }

    counts
}

/// Claim count and concatenated claim text. The count comes from the layout's
/// explicit marker when present; otherwise the enumerated claim elements are
/// counted. Newlines inside claim fragments are normalized to spaces.
pub fn claims(doc: &PageDocument, layout: PageLayout) -> Option<(u32, String)> {
    let section = doc.select_first(&CLAIMS_SECTION)?;

    let explicit = match layout {
        // US layout: a dedicated count span inside the claims section.
        PageLayout::Us => section
            .select(&CLAIM_COUNT)
            .next()
            .and_then(|el| element_text(&el).parse::<u32>().ok()),
        // International layout: the last <claim> element carries the total
        // in its num attribute.
        PageLayout::International => section
            .select(&CLAIM_ELEMENT)
            .last()
            .and_then(|el| el.value().attr("num"))
            .and_then(|num| num.trim().trim_start_matches('0').parse::<u32>().ok()),
    };

    let count = explicit.unwrap_or_else(|| {
        let enumerated = section.select(&CLAIM_ELEMENT).count();
        let enumerated = if enumerated > 0 {
            enumerated
        } else {
            section.select(&CLAIM_DIV).count()
        };
        debug!("No explicit claim count marker, enumerated {}", enumerated);
        enumerated as u32
    });

    let fragments: Vec<String> = section
        .select(&CLAIM_TEXT)
        .map(|el| element_text(&el))
        .filter(|text| !text.is_empty())
        .collect();

    Some((count, fragments.join(" ")))
}

/// Counts similar documents published strictly before the submission date.
/// Rows whose publication date fails to parse are skipped; a missing or
/// malformed submission date yields `None`.
pub fn similar_prior_art(doc: &PageDocument) -> Option<u32> {
    let submitted = doc.meta_content(&DATE_SUBMITTED)?;
    let submission_date = NaiveDate::parse_from_str(&submitted, DATE_FORMAT).ok()?;

    let mut earlier = 0;
    for row in doc.select_all(&SIMILAR_DOCUMENT) {
        let publication = match row.select(&PUBLICATION_DATE).next() {
            Some(el) => element_text(&el),
            None => continue,
        };

        match NaiveDate::parse_from_str(&publication, DATE_FORMAT) {
            Ok(date) if date < submission_date => earlier += 1,
            Ok(_) => {}
            Err(_) => {
                debug!("Skipping similar document with malformed date: {}", publication);
            }
        }
    }

    Some(earlier)
}

/// Number of contributor markers tagged with the inventor role.
pub fn inventor_count(doc: &PageDocument) -> u32 {
    doc.select_all(&INVENTOR).len() as u32
}

/// Human-readable title, isolated from the page generator's
/// "<number> - <title> - Google Patents" format. Pages without the leading
/// patent number only carry the trailing site-name segment.
pub fn title(doc: &PageDocument) -> Option<String> {
    let raw = doc.title_text(&PAGE_TITLE)?;
    let segments: Vec<&str> = raw.split(TITLE_SEPARATOR).collect();

    let title = match segments.len() {
        0 | 1 => raw.clone(),
        2 => segments[0].to_string(),
        _ => segments[1..segments.len() - 1].join(TITLE_SEPARATOR),
    };

    let title = title.trim().to_string();
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

/// Abstract from the description meta marker.
pub fn abstract_text(doc: &PageDocument) -> Option<String> {
    doc.meta_content(&ABSTRACT).filter(|text| !text.is_empty())
}

/// Number of "Fee payment" rows in the legal events table.
pub fn fee_payment_count(doc: &PageDocument) -> u32 {
    doc.select_all(&LEGAL_EVENT)
        .iter()
        .filter(|row| {
            row.select(&EVENT_TITLE)
                .next()
                .map(|el| element_text(&el) == "Fee payment")
                .unwrap_or(false)
        })
        .count() as u32
}

/// Original assignee name.
pub fn original_assignee(doc: &PageDocument) -> Option<String> {
    doc.first_text(&ASSIGNEE_ORIGINAL)
        .filter(|text| !text.is_empty())
}

/// Paragraph text of the description section joined into one string.
pub fn description_text(doc: &PageDocument) -> Option<String> {
    let section = doc.select_first(&DESCRIPTION_SECTION)?;
    let paragraphs: Vec<String> = section
        .select(&PARAGRAPH)
        .map(|el| element_text(&el))
        .filter(|text| !text.is_empty())
        .collect();

    if paragraphs.is_empty() {
        None
    } else {
        Some(paragraphs.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc(markup: &str) -> PageDocument {
        PageDocument::parse(markup).unwrap()
    }

    #[test]
    fn test_classification_legacy_layout_first_occurrence() {
        let page = doc(r#"<span itemprop="Code">G06F 17/30</span>
                         <span itemprop="Code">H04L 9/00</span>"#);
        assert_eq!(classification_code(&page).unwrap(), "G06F 17/30");
    }

    #[test]
    fn test_classification_new_layout_skips_sort_key() {
        let page = doc(r#"<span itemprop="CodeSort">G06F0017300000</span>
                         <span itemprop="Code">G06F0017300000</span>
                         <span itemprop="Code">G06F 17/30</span>"#);
        assert_eq!(classification_code(&page).unwrap(), "G06F 17/30");
    }

    #[test]
    fn test_classification_absent() {
        assert_eq!(classification_code(&doc("<p>no code here</p>")), None);
    }

    #[test]
    fn test_application_count() {
        let page = doc(r#"<meta itemprop="Leaf"><meta itemprop="Leaf"><meta itemprop="Leaf">"#);
        assert_eq!(application_count(&page), 3);
        assert_eq!(application_count(&doc("<p></p>")), 0);
    }

    #[test]
    fn test_citation_headings() {
        let page = doc(
            r#"<h2>Patent Citations (12) Also Published As</h2>
               <h2>Non-Patent Citations (4) More</h2>
               <h2>Abstract</h2>"#,
        );
        let counts = citation_counts(&page);
        assert_eq!(counts.patent, 12);
        assert_eq!(counts.non_patent, 4);
    }

    #[test]
    fn test_citation_short_heading_skipped() {
        let page = doc("<h2>Patent Citations</h2>");
        assert_eq!(citation_counts(&page), CitationCounts::default());
    }

    #[test]
    fn test_citation_unparseable_count_skipped() {
        let page = doc("<h2>Patent Citations (abc) More</h2>");
        assert_eq!(citation_counts(&page).patent, 0);
    }

    #[test]
    fn test_claims_us_layout() {
        let page = doc(
            r#"<section itemprop="claims">
                 <span itemprop="count">2</span>
                 <div class="claim-text">A method comprising
a step.</div>
                 <div class="claim-text">The method of claim 1.</div>
               </section>"#,
        );
        let (count, text) = claims(&page, PageLayout::Us).unwrap();
        assert_eq!(count, 2);
        assert_eq!(text, "A method comprising a step. The method of claim 1.");
    }

    #[test]
    fn test_claims_international_layout() {
        let page = doc(
            r#"<section itemprop="claims">
                 <claim num="00001"><div class="claim-text">First.</div></claim>
                 <claim num="00017"><div class="claim-text">Last.</div></claim>
               </section>"#,
        );
        let (count, _) = claims(&page, PageLayout::International).unwrap();
        assert_eq!(count, 17);
    }

    #[test]
    fn test_claims_fallback_to_enumeration() {
        let page = doc(
            r#"<section itemprop="claims">
                 <div class="claim"><div class="claim-text">One.</div></div>
                 <div class="claim"><div class="claim-text">Two.</div></div>
                 <div class="claim"><div class="claim-text">Three.</div></div>
               </section>"#,
        );
        let (count, _) = claims(&page, PageLayout::Us).unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_claims_section_absent() {
        assert_eq!(claims(&doc("<p>nothing</p>"), PageLayout::Us), None);
    }

    #[test]
    fn test_similar_prior_art_counts_only_earlier_parseable_dates() {
        let page = doc(
            r#"<meta name="DC.date" scheme="dateSubmitted" content="2015-06-01">
               <table>
                 <tr itemprop="similarDocuments"><td><time itemprop="publicationDate">2014-01-01</time></td></tr>
                 <tr itemprop="similarDocuments"><td><time itemprop="publicationDate">2016-01-01</time></td></tr>
                 <tr itemprop="similarDocuments"><td><time itemprop="publicationDate">bad-date</time></td></tr>
               </table>"#,
        );
        assert_eq!(similar_prior_art(&page), Some(1));
    }

    #[test]
    fn test_similar_prior_art_without_submission_date() {
        let page = doc(
            r#"<tr itemprop="similarDocuments"><time itemprop="publicationDate">2014-01-01</time></tr>"#,
        );
        assert_eq!(similar_prior_art(&page), None);
    }

    #[test]
    fn test_similar_prior_art_same_day_not_counted() {
        let page = doc(
            r#"<meta name="DC.date" scheme="dateSubmitted" content="2015-06-01">
               <table><tr itemprop="similarDocuments"><td><time itemprop="publicationDate">2015-06-01</time></td></tr></table>"#,
        );
        assert_eq!(similar_prior_art(&page), Some(0));
    }

    #[test]
    fn test_inventor_count() {
        let page = doc(
            r#"<meta name="DC.contributor" scheme="inventor" content="A">
               <meta name="DC.contributor" scheme="inventor" content="B">
               <meta name="DC.contributor" scheme="assignee" content="C">"#,
        );
        assert_eq!(inventor_count(&page), 2);
    }

    #[test]
    fn test_title_with_patent_number_prefix() {
        let page = doc("<title>US7948209B2 - Wireless charging system - Google Patents</title>");
        assert_eq!(title(&page).unwrap(), "Wireless charging system");
    }

    #[test]
    fn test_title_without_patent_number_prefix() {
        let page = doc("<title>Wireless charging system - Google Patents</title>");
        assert_eq!(title(&page).unwrap(), "Wireless charging system");
    }

    #[test]
    fn test_title_with_separator_inside_title() {
        let page = doc("<title>US1B2 - Self - healing polymer - Google Patents</title>");
        assert_eq!(title(&page).unwrap(), "Self - healing polymer");
    }

    #[test]
    fn test_abstract_present_and_absent() {
        let page = doc(r#"<head><meta name="description" content="An apparatus."></head>"#);
        assert_eq!(abstract_text(&page).unwrap(), "An apparatus.");
        assert_eq!(abstract_text(&doc("<head></head>")), None);
    }

    #[test]
    fn test_fee_payment_count() {
        let page = doc(
            r#"<table>
                 <tr itemprop="legalEvents"><td itemprop="title">Fee payment</td></tr>
                 <tr itemprop="legalEvents"><td itemprop="title">Assignment</td></tr>
                 <tr itemprop="legalEvents"><td itemprop="title">Fee payment</td></tr>
               </table>"#,
        );
        assert_eq!(fee_payment_count(&page), 2);
    }

    #[test]
    fn test_original_assignee() {
        let page = doc(r#"<dl><dd itemprop="assigneeOriginal">Example University</dd></dl>"#);
        assert_eq!(original_assignee(&page).unwrap(), "Example University");
    }

    #[test]
    fn test_description_text() {
        let page = doc(
            r#"<section itemprop="description">
                 <heading>BACKGROUND</heading>
                 <p>First paragraph.</p>
                 <p>Second paragraph.</p>
               </section>"#,
        );
        assert_eq!(
            description_text(&page).unwrap(),
            "First paragraph. Second paragraph."
        );
    }
}
