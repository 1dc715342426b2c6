//! DigitalOcean published IP ranges.
//!
//! The feed is a header-less CSV with positional columns
//! `range,country,region,city,postcode`. Rows with missing trailing fields
//! occur in the wild and are tolerated; only the range column is required.

use crate::error::{FetchError, FetchResult};
use crate::http;
use crate::net;
use crate::providers::RangeProvider;
use async_trait::async_trait;
use reqwest::Client;
use std::net::IpAddr;
use tracing::info;

const FEED_URL: &str = "http://digitalocean.com/geo/google.csv";

/// One containing range with the feed's geographic metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
struct GeoMatch {
    range: String,
    country: String,
    state: String,
    city: String,
    postcode: String,
}

/// DigitalOcean range feed.
pub struct DigitalOcean {
    feed_url: String,
}

impl Default for DigitalOcean {
    fn default() -> Self {
        Self {
            feed_url: FEED_URL.to_string(),
        }
    }
}

impl DigitalOcean {
    /// Use an alternate feed endpoint.
    pub fn with_feed_url(feed_url: impl Into<String>) -> Self {
        Self {
            feed_url: feed_url.into(),
        }
    }
}

#[async_trait]
impl RangeProvider for DigitalOcean {
    fn name(&self) -> &'static str {
        "DigitalOcean"
    }

    async fn check(&self, http: &Client, target: IpAddr) -> FetchResult<bool> {
        let body = http::fetch_text(http, &self.feed_url).await?;
        let matches = scan(&body, target)?;

        for m in &matches {
            info!(
                "Match for DigitalOcean range \"{}\", country \"{}\", state \"{}\" and address \"{} {}\"",
                m.range, m.country, m.state, m.city, m.postcode
            );
        }

        Ok(!matches.is_empty())
    }
}

/// Collect every CSV row whose range contains the target.
fn scan(body: &str, target: IpAddr) -> FetchResult<Vec<GeoMatch>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut matches = Vec::new();

    for record in reader.records() {
        let record = record?;
        let range = record
            .get(0)
            .ok_or_else(|| FetchError::Parse("CSV row without a range column".into()))?;

        if net::cidr_contains(range, target)? {
            matches.push(GeoMatch {
                range: range.to_string(),
                country: record.get(1).unwrap_or_default().to_string(),
                state: record.get(2).unwrap_or_default().to_string(),
                city: record.get(3).unwrap_or_default().to_string(),
                postcode: record.get(4).unwrap_or_default().to_string(),
            });
        }
    }

    Ok(matches)
}
