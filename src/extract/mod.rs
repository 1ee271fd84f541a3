// file: src/extract/mod.rs
// description: field extraction module exports
// reference: internal module structure

pub mod fields;
pub mod record;
pub mod selectors;

pub use fields::CitationCounts;
pub use record::{Classification, PatentRecord, CLASS_ALPHABET};
