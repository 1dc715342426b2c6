//! Shared HTTP client construction and fetch helpers.
//!
//! All provider feeds are public, unauthenticated documents retrieved with a
//! single GET. Redirects are followed (reqwest default) and non-2xx responses
//! are errors.

use crate::config::AppSettings;
use crate::error::FetchResult;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Build the HTTP client used for all feed requests.
pub fn build_client(settings: &AppSettings) -> FetchResult<Client> {
    let client = Client::builder()
        .user_agent(settings.user_agent.as_str())
        .timeout(Duration::from_millis(settings.request_timeout_ms))
        .build()?;
    Ok(client)
}

/// GET a URL and decode the response body as JSON.
pub async fn fetch_json<T: DeserializeOwned>(client: &Client, url: &str) -> FetchResult<T> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.json().await?)
}

/// GET a URL and return the response body as text.
pub async fn fetch_text(client: &Client, url: &str) -> FetchResult<String> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.text().await?)
}
