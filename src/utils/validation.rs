// file: src/utils/validation.rs
// description: patent number sanitation and layout-flag detection
// reference: input validation patterns

use crate::error::{PipelineError, Result};
use crate::scrape::PageLayout;

/// A sanitized patent number with its layout flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatentNumber {
    pub number: String,
    pub layout: PageLayout,
}

impl PatentNumber {
    /// Path of the patent's english page relative to the site base.
    pub fn page_path(&self) -> String {
        format!("/patent/{}/en", self.number)
    }
}

/// Normalizes user input into a patent number: trims, removes interior
/// spaces, and detects the international (WO) layout from the prefix.
pub fn sanitize_patent_number(raw: &str) -> Result<PatentNumber> {
    let number: String = raw.trim().chars().filter(|c| !c.is_whitespace()).collect();

    if number.is_empty() {
        return Err(PipelineError::PatentNumber(
            "patent number is empty".to_string(),
        ));
    }

    if !number.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(PipelineError::PatentNumber(format!(
            "patent number contains invalid characters: {}",
            number
        )));
    }

    let layout = if number.to_ascii_uppercase().starts_with("WO") {
        PageLayout::International
    } else {
        PageLayout::Us
    };

    Ok(PatentNumber { number, layout })
}
