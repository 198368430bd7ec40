// src/pipeline/scrape.rs

//! Headline scraping pipeline.
//!
//! Fetch, extract, deduplicate, persist, report. Strictly sequential; the
//! report is written only after the headline list is fully collected, so
//! a fetch or extraction failure never touches a report from a prior run.

use crate::error::Result;
use crate::models::{Config, ScrapeOutcome};
use crate::services::{dedup_headlines, extract_headlines};
use crate::storage::ReportStorage;
use crate::utils::{get_domain, http, log};

/// Homepage scanned for headlines.
pub const NEWS_URL: &str = "https://www.bbc.com/news";

/// At most this many headlines are previewed on the console.
pub const PREVIEW_COUNT: usize = 5;

/// Run the headline scraper against the fixed news homepage.
pub async fn run_scrape(config: &Config, storage: &dyn ReportStorage) -> Result<()> {
    run_scrape_url(config, storage, NEWS_URL).await
}

/// Run the scrape pipeline against an explicit URL.
pub(crate) async fn run_scrape_url(
    config: &Config,
    storage: &dyn ReportStorage,
    url: &str,
) -> Result<()> {
    log::header("BBC News Headline Scraper");
    log::info("Fetching data from BBC News...");
    if config.logging.show_progress {
        if let Some(host) = get_domain(url) {
            log::sub_item(&format!("Source host: {}", host));
        }
    }

    let client = http::create_async_client(&config.scraper)?;
    let body = http::fetch_page(&client, url).await?;

    let raw = extract_headlines(&body)?;
    let outcome = ScrapeOutcome {
        raw_count: raw.len(),
        headlines: dedup_headlines(raw),
    };

    if config.logging.show_progress {
        log::sub_item(&format!(
            "{} headings matched, {} duplicates removed",
            outcome.raw_count,
            outcome.duplicate_count()
        ));
    }

    let summary = storage.write_report(&outcome.headlines).await?;

    log::success(&format!(
        "Successfully scraped {} headlines!",
        summary.saved_count
    ));
    log::info(&format!("Headlines saved to '{}'", summary.location));

    if config.output.console_enabled {
        log::info(&format!("First {} headlines:", PREVIEW_COUNT));
        log::separator();
        for (i, headline) in preview(&outcome.headlines).iter().enumerate() {
            log::sub_item(&format!("{}. {}", i + 1, headline));
        }
    }

    Ok(())
}

/// Console preview slice: the first [`PREVIEW_COUNT`] headlines.
fn preview(headlines: &[String]) -> &[String] {
    &headlines[..headlines.len().min(PREVIEW_COUNT)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::LocalStorage;
    use tempfile::TempDir;

    #[test]
    fn preview_is_capped_at_five() {
        let many: Vec<String> = (0..8).map(|i| format!("Headline number {i}")).collect();
        assert_eq!(preview(&many).len(), 5);
        assert_eq!(preview(&many)[0], "Headline number 0");

        let few: Vec<String> = vec!["Only headline here".to_string()];
        assert_eq!(preview(&few).len(), 1);

        assert!(preview(&[]).is_empty());
    }

    #[tokio::test]
    async fn fetch_failure_is_network_tier_and_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        let config = Config::default();

        // Nothing listens on the discard port; the connection is refused
        // before any bytes are exchanged.
        let result = run_scrape_url(&config, &storage, "http://127.0.0.1:9/news").await;

        let err = result.unwrap_err();
        assert!(err.is_network());
        assert!(!storage.report_path().exists());
    }
}
