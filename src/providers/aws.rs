//! AWS published IP ranges.
//!
//! Feed shape: `{"prefixes": [{"ip_prefix", "region", "service"}]}`.

use crate::error::FetchResult;
use crate::http;
use crate::net;
use crate::providers::{log_matches, RangeMatch, RangeProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::net::IpAddr;

const FEED_URL: &str = "https://ip-ranges.amazonaws.com/ip-ranges.json";

#[derive(Debug, Deserialize)]
struct AwsRanges {
    prefixes: Vec<AwsPrefix>,
}

#[derive(Debug, Deserialize)]
struct AwsPrefix {
    ip_prefix: String,
    region: String,
    service: String,
}

/// AWS range feed.
pub struct Aws {
    feed_url: String,
}

impl Default for Aws {
    fn default() -> Self {
        Self {
            feed_url: FEED_URL.to_string(),
        }
    }
}

impl Aws {
    /// Use an alternate feed endpoint.
    pub fn with_feed_url(feed_url: impl Into<String>) -> Self {
        Self {
            feed_url: feed_url.into(),
        }
    }
}

#[async_trait]
impl RangeProvider for Aws {
    fn name(&self) -> &'static str {
        "AWS"
    }

    async fn check(&self, http: &Client, target: IpAddr) -> FetchResult<bool> {
        let doc: AwsRanges = http::fetch_json(http, &self.feed_url).await?;
        let matches = scan(&doc, target)?;
        log_matches(self.name(), &matches);
        Ok(!matches.is_empty())
    }
}

/// Collect every prefix entry containing the target.
fn scan(doc: &AwsRanges, target: IpAddr) -> FetchResult<Vec<RangeMatch>> {
    let mut matches = Vec::new();

    for entry in &doc.prefixes {
        if net::cidr_contains(&entry.ip_prefix, target)? {
            matches.push(RangeMatch {
                prefix: entry.ip_prefix.clone(),
                region: entry.region.clone(),
                service: entry.service.clone(),
            });
        }
    }

    Ok(matches)
}
