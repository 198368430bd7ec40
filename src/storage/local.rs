//! Local filesystem storage implementation.
//!
//! Writes the headline report as a single UTF-8 text file in the storage
//! root, replacing whatever a previous run left there.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::Result;
use crate::models::ReportSummary;
use crate::storage::ReportStorage;

/// File name of the headline report inside the storage root.
pub const REPORT_FILE_NAME: &str = "news_headlines.txt";

/// First line of the report.
const REPORT_HEADER: &str = "TOP NEWS HEADLINES";

/// Width of the `=` separator under the header.
const SEPARATOR_WIDTH: usize = 50;

/// At most this many headlines are written to the report.
pub const MAX_REPORT_HEADLINES: usize = 20;

/// Render the report text: header, separator, blank line, then one
/// numbered line per headline, truncated to [`MAX_REPORT_HEADLINES`].
pub fn render_report(headlines: &[String]) -> String {
    let mut out = String::new();
    out.push_str(REPORT_HEADER);
    out.push('\n');
    out.push_str(&"=".repeat(SEPARATOR_WIDTH));
    out.push_str("\n\n");

    for (i, headline) in headlines.iter().take(MAX_REPORT_HEADLINES).enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, headline));
    }

    out
}

/// Local filesystem storage backend.
#[derive(Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Full path of the report file.
    pub fn report_path(&self) -> PathBuf {
        self.root_dir.join(REPORT_FILE_NAME)
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, path: &PathBuf, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }
}

#[async_trait]
impl ReportStorage for LocalStorage {
    async fn write_report(&self, headlines: &[String]) -> Result<ReportSummary> {
        let path = self.report_path();
        let report = render_report(headlines);
        self.write_bytes(&path, report.as_bytes()).await?;

        Ok(ReportSummary {
            saved_count: headlines.len().min(MAX_REPORT_HEADLINES),
            location: path.display().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn headlines(n: usize) -> Vec<String> {
        (1..=n)
            .map(|i| format!("Unique headline number {i}"))
            .collect()
    }

    #[test]
    fn report_has_fixed_header_and_separator() {
        let report = render_report(&headlines(2));
        let mut lines = report.lines();
        assert_eq!(lines.next(), Some("TOP NEWS HEADLINES"));
        assert_eq!(lines.next(), Some("=".repeat(50).as_str()));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("1. Unique headline number 1"));
        assert_eq!(lines.next(), Some("2. Unique headline number 2"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn report_truncates_to_twenty_entries() {
        let report = render_report(&headlines(25));
        let numbered: Vec<&str> = report.lines().skip(3).collect();
        assert_eq!(numbered.len(), 20);
        assert!(numbered[19].starts_with("20. "));
    }

    #[test]
    fn report_with_no_headlines_is_header_only() {
        let report = render_report(&[]);
        // Header, separator, and the blank line; no numbered entries.
        assert_eq!(report.lines().count(), 3);
        assert!(report.ends_with("\n\n"));
    }

    #[tokio::test]
    async fn write_report_creates_the_file() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        let summary = storage.write_report(&headlines(3)).await.unwrap();
        assert_eq!(summary.saved_count, 3);

        let written = tokio::fs::read_to_string(storage.report_path())
            .await
            .unwrap();
        assert!(written.starts_with("TOP NEWS HEADLINES\n"));
    }

    #[tokio::test]
    async fn saved_count_is_capped_at_twenty() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        let summary = storage.write_report(&headlines(25)).await.unwrap();
        assert_eq!(summary.saved_count, 20);
    }

    #[tokio::test]
    async fn rewrite_with_same_input_is_byte_identical() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        let input = headlines(7);

        storage.write_report(&input).await.unwrap();
        let first = tokio::fs::read(storage.report_path()).await.unwrap();

        storage.write_report(&input).await.unwrap();
        let second = tokio::fs::read(storage.report_path()).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn overwrite_replaces_previous_report() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        storage.write_report(&headlines(25)).await.unwrap();
        storage.write_report(&headlines(1)).await.unwrap();

        let written = tokio::fs::read_to_string(storage.report_path())
            .await
            .unwrap();
        assert_eq!(written.lines().count(), 4);
    }

    #[tokio::test]
    async fn non_ascii_text_round_trips_as_utf8() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        let input = vec!["Überschrift des Tages aus München".to_string()];
        storage.write_report(&input).await.unwrap();

        let written = tokio::fs::read_to_string(storage.report_path())
            .await
            .unwrap();
        assert!(written.contains("1. Überschrift des Tages aus München"));
    }
}
