//! Storage abstractions for headline report persistence.

mod local;

use async_trait::async_trait;

pub use local::{MAX_REPORT_HEADLINES, REPORT_FILE_NAME, LocalStorage, render_report};

use crate::error::Result;
use crate::models::ReportSummary;

/// Destination for rendered headline reports.
#[async_trait]
pub trait ReportStorage {
    /// Write the report for the given headlines, overwriting any previous
    /// report. The report is rendered in full before any bytes are
    /// written, so a partial file is never observable.
    async fn write_report(&self, headlines: &[String]) -> Result<ReportSummary>;
}
