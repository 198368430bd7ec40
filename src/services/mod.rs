//! Service layer for the scraper application.

mod extractor;

pub use extractor::{HEADING_TAGS, MIN_HEADLINE_CHARS, dedup_headlines, extract_headlines};
