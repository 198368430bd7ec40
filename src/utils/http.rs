// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use crate::error::{AppError, Result};
use crate::models::ScraperConfig;

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &ScraperConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch a page and return its body text.
///
/// Any non-2xx status is an error; redirects are followed by the client
/// before the status is inspected.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::status(url, status));
    }
    Ok(response.text().await?)
}
