//! GCP published IP ranges.
//!
//! Feed shape: `{"prefixes": [{"ipv4Prefix" | "ipv6Prefix", "scope",
//! "service"}]}` — each entry carries exactly one of the two prefix fields.

use crate::error::{FetchError, FetchResult};
use crate::http;
use crate::net;
use crate::providers::{log_matches, RangeMatch, RangeProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::net::IpAddr;

const FEED_URL: &str = "https://www.gstatic.com/ipranges/cloud.json";

#[derive(Debug, Deserialize)]
struct GcpRanges {
    prefixes: Vec<GcpPrefix>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GcpPrefix {
    ipv4_prefix: Option<String>,
    ipv6_prefix: Option<String>,
    scope: String,
    service: String,
}

impl GcpPrefix {
    /// The declared prefix, whichever address family the entry carries.
    fn prefix(&self) -> FetchResult<&str> {
        self.ipv4_prefix
            .as_deref()
            .or(self.ipv6_prefix.as_deref())
            .ok_or_else(|| FetchError::Parse("prefix entry without ipv4Prefix or ipv6Prefix".into()))
    }
}

/// GCP range feed.
pub struct Gcp {
    feed_url: String,
}

impl Default for Gcp {
    fn default() -> Self {
        Self {
            feed_url: FEED_URL.to_string(),
        }
    }
}

impl Gcp {
    /// Use an alternate feed endpoint.
    pub fn with_feed_url(feed_url: impl Into<String>) -> Self {
        Self {
            feed_url: feed_url.into(),
        }
    }
}

#[async_trait]
impl RangeProvider for Gcp {
    fn name(&self) -> &'static str {
        "GCP"
    }

    async fn check(&self, http: &Client, target: IpAddr) -> FetchResult<bool> {
        let doc: GcpRanges = http::fetch_json(http, &self.feed_url).await?;
        let matches = scan(&doc, target)?;
        log_matches(self.name(), &matches);
        Ok(!matches.is_empty())
    }
}

/// Collect every prefix entry containing the target.
fn scan(doc: &GcpRanges, target: IpAddr) -> FetchResult<Vec<RangeMatch>> {
    let mut matches = Vec::new();

    for entry in &doc.prefixes {
        let prefix = entry.prefix()?;
        if net::cidr_contains(prefix, target)? {
            matches.push(RangeMatch {
                prefix: prefix.to_string(),
                region: entry.scope.clone(),
                service: entry.service.clone(),
            });
        }
    }

    Ok(matches)
}
