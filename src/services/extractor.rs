// src/services/extractor.rs

//! Headline extraction service.
//!
//! Parses a page body leniently and collects heading text that looks like
//! a headline: visible text of `h2` and `h3` elements, trimmed, longer
//! than the minimum length. Malformed markup never fails the parse; the
//! document is built best-effort.

use std::collections::HashSet;

use scraper::{Html, Selector};

use crate::error::{AppError, Result};

/// Heading tags scanned for headline text, in scan order. All `h2`
/// elements are collected before any `h3`, regardless of their relative
/// position in the document.
pub const HEADING_TAGS: [&str; 2] = ["h2", "h3"];

/// Trimmed heading text must be strictly longer than this many characters
/// to count as a headline. Filters out nav labels and section stubs.
pub const MIN_HEADLINE_CHARS: usize = 10;

/// Extract candidate headlines from an HTML body.
///
/// One full pass per heading tag, document order within each pass.
/// Text is the concatenation of all descendant text nodes, trimmed.
pub fn extract_headlines(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let mut headlines = Vec::new();

    for tag in HEADING_TAGS {
        let selector = parse_selector(tag)?;
        for element in document.select(&selector) {
            let raw: String = element.text().collect();
            let text = raw.trim();
            if text.chars().count() > MIN_HEADLINE_CHARS {
                headlines.push(text.to_string());
            }
        }
    }

    Ok(headlines)
}

/// Remove repeated headlines, keeping the first occurrence of each.
///
/// Exact string equality, case-sensitive. Relative order of kept entries
/// equals their order of first appearance.
pub fn dedup_headlines(headlines: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for headline in headlines {
        if seen.insert(headline.clone()) {
            unique.push(headline);
        }
    }
    unique
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}
