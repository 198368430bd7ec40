//! Pipeline entry points for scraper operations.
//!
//! - `run_scrape`: Fetch the news homepage and write the headline report

pub mod scrape;

pub use scrape::{NEWS_URL, run_scrape};
