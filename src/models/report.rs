//! Scrape outcome and report summary structures.

/// Result of extracting and deduplicating headlines from one page.
#[derive(Debug, Default)]
pub struct ScrapeOutcome {
    /// Unique headlines in first-seen order
    pub headlines: Vec<String>,

    /// Number of headlines before deduplication
    pub raw_count: usize,
}

impl ScrapeOutcome {
    /// Number of duplicates removed by the dedup pass.
    pub fn duplicate_count(&self) -> usize {
        self.raw_count.saturating_sub(self.headlines.len())
    }
}

/// Summary of a report write.
#[derive(Debug)]
pub struct ReportSummary {
    /// Number of headlines actually written (after truncation)
    pub saved_count: usize,

    /// Where the report landed
    pub location: String,
}
