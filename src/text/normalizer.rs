// file: src/text/normalizer.rs
// description: claim text tokenization and cleaning for embedding
// reference: https://docs.rs/regex

use crate::text::lemma::lemmatize;
use crate::text::stopwords::is_stopword;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Word units (with internal apostrophes or hyphens), numeric literals,
    // or single punctuation marks.
    static ref TOKEN: Regex = Regex::new(
        r"[A-Za-z]+(?:['’-][A-Za-z]+)*|\d+(?:\.\d+)?|[^\sA-Za-z0-9]"
    ).expect("TOKEN regex is valid");
}

/// Cleans raw claim text into an ordered token sequence ready for
/// embedding: tokenize, lowercase, drop stop-words and punctuation,
/// lemmatize, drop numeric literals.
pub struct ClaimNormalizer;

impl ClaimNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, text: &str) -> Vec<String> {
        TOKEN
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .filter(|token| !is_stopword(token))
            .filter(|token| token.chars().any(|c| c.is_alphanumeric()))
            .map(|token| lemmatize(&token))
            // Lemmatization can land on a stop-word ("others" -> "other"),
            // so the filter runs on the lemma as well.
            .filter(|token| !is_stopword(token))
            .filter(|token| token.parse::<f64>().is_err())
            .collect()
    }
}

impl Default for ClaimNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lowercase_and_punctuation_removed() {
        let normalizer = ClaimNormalizer::new();
        let tokens = normalizer.normalize("A Method, comprising: two coils.");
        assert_eq!(tokens, vec!["method", "comprising", "two", "coil"]);
    }

    #[test]
    fn test_stopwords_removed() {
        let normalizer = ClaimNormalizer::new();
        let tokens = normalizer.normalize("the apparatus of the first claim");
        assert_eq!(tokens, vec!["apparatus", "first", "claim"]);
    }

    #[test]
    fn test_numeric_literals_removed() {
        let normalizer = ClaimNormalizer::new();
        let tokens = normalizer.normalize("a voltage of 3.3 volts across 100 ohms");
        assert_eq!(tokens, vec!["voltage", "volt", "across", "ohm"]);
    }

    #[test]
    fn test_plurals_lemmatized() {
        let normalizer = ClaimNormalizer::new();
        let tokens = normalizer.normalize("wherein said devices comprise switches");
        assert_eq!(tokens, vec!["wherein", "said", "device", "comprise", "switch"]);
    }

    #[test]
    fn test_empty_input() {
        let normalizer = ClaimNormalizer::new();
        assert!(normalizer.normalize("").is_empty());
        assert!(normalizer.normalize("  \n ").is_empty());
    }

    #[test]
    fn test_stopword_produced_by_lemmatization_removed() {
        let normalizer = ClaimNormalizer::new();
        // "others" lemmatizes to the stop-word "other" and must not survive.
        let tokens = normalizer.normalize("a device and others");
        assert_eq!(tokens, vec!["device"]);
    }

    #[test]
    fn test_idempotent_on_cleaned_sequences() {
        let normalizer = ClaimNormalizer::new();
        let inputs = [
            "A method for wireless charging, comprising: 2 coils and a housing.",
            "The devices of claims 1-5, wherein the matrices are inverted.",
            "don't count STOP-words; keep claim-level terms.",
            "a device and others",
        ];

        for input in inputs {
            let once = normalizer.normalize(input);
            let twice = normalizer.normalize(&once.join(" "));
            assert_eq!(twice, once, "normalize not idempotent for: {}", input);
        }
    }
}
