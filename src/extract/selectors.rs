// file: src/extract/selectors.rs
// description: precompiled css selectors for patent page markers
// reference: https://docs.rs/scraper

use lazy_static::lazy_static;
use scraper::Selector;

lazy_static! {
    // Classification markers. CODE_SORT only appears in the newer layout,
    // where it precedes the real code span.
    pub static ref CODE: Selector = Selector::parse(r#"span[itemprop="Code"]"#)
        .expect("CODE selector is valid");

    pub static ref CODE_SORT: Selector = Selector::parse(r#"span[itemprop="CodeSort"]"#)
        .expect("CODE_SORT selector is valid");

    // One marker per leaf classification (potential application).
    pub static ref LEAF: Selector = Selector::parse(r#"meta[itemprop="Leaf"]"#)
        .expect("LEAF selector is valid");

    // Citation counts live in section headings.
    pub static ref SECTION_HEADING: Selector = Selector::parse("h2")
        .expect("SECTION_HEADING selector is valid");

    // Claims section and its two count encodings.
    pub static ref CLAIMS_SECTION: Selector = Selector::parse(r#"section[itemprop="claims"]"#)
        .expect("CLAIMS_SECTION selector is valid");

    pub static ref CLAIM_COUNT: Selector = Selector::parse(r#"span[itemprop="count"]"#)
        .expect("CLAIM_COUNT selector is valid");

    pub static ref CLAIM_ELEMENT: Selector = Selector::parse("claim")
        .expect("CLAIM_ELEMENT selector is valid");

    pub static ref CLAIM_DIV: Selector = Selector::parse("div.claim")
        .expect("CLAIM_DIV selector is valid");

    pub static ref CLAIM_TEXT: Selector = Selector::parse("div.claim-text")
        .expect("CLAIM_TEXT selector is valid");

    // Similar-document rows and their dates.
    pub static ref DATE_SUBMITTED: Selector =
        Selector::parse(r#"meta[name="DC.date"][scheme="dateSubmitted"]"#)
            .expect("DATE_SUBMITTED selector is valid");

    pub static ref SIMILAR_DOCUMENT: Selector =
        Selector::parse(r#"tr[itemprop="similarDocuments"]"#)
            .expect("SIMILAR_DOCUMENT selector is valid");

    pub static ref PUBLICATION_DATE: Selector =
        Selector::parse(r#"time[itemprop="publicationDate"]"#)
            .expect("PUBLICATION_DATE selector is valid");

    // Contributor markers tagged with the inventor role.
    pub static ref INVENTOR: Selector =
        Selector::parse(r#"meta[name="DC.contributor"][scheme="inventor"]"#)
            .expect("INVENTOR selector is valid");

    pub static ref PAGE_TITLE: Selector = Selector::parse("title")
        .expect("PAGE_TITLE selector is valid");

    pub static ref ABSTRACT: Selector = Selector::parse(r#"meta[name="description"]"#)
        .expect("ABSTRACT selector is valid");

    // Legal events table, for fee payment counting.
    pub static ref LEGAL_EVENT: Selector = Selector::parse(r#"tr[itemprop="legalEvents"]"#)
        .expect("LEGAL_EVENT selector is valid");

    pub static ref EVENT_TITLE: Selector = Selector::parse(r#"td[itemprop="title"]"#)
        .expect("EVENT_TITLE selector is valid");

    pub static ref ASSIGNEE_ORIGINAL: Selector =
        Selector::parse(r#"dd[itemprop="assigneeOriginal"]"#)
            .expect("ASSIGNEE_ORIGINAL selector is valid");

    pub static ref DESCRIPTION_SECTION: Selector =
        Selector::parse(r#"section[itemprop="description"]"#)
            .expect("DESCRIPTION_SECTION selector is valid");

    pub static ref PARAGRAPH: Selector = Selector::parse("p")
        .expect("PARAGRAPH selector is valid");
}
