// file: src/scrape/mod.rs
// description: page fetching and parsed document module exports
// reference: internal module structure

pub mod document;
pub mod loader;

pub use document::{PageDocument, PageLayout};
pub use loader::DocumentLoader;
