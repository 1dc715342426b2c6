//! Oracle Cloud Infrastructure published IP ranges.
//!
//! Feed shape: `{"regions": [{"region", "cidrs": [{"cidr", "tags": []}]}]}`.
//! The last tag of a cidr entry is its service label.

use crate::error::{FetchError, FetchResult};
use crate::http;
use crate::net;
use crate::providers::{log_matches, RangeMatch, RangeProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::net::IpAddr;

const FEED_URL: &str = "https://docs.cloud.oracle.com/en-us/iaas/tools/public_ip_ranges.json";

#[derive(Debug, Deserialize)]
struct OciRanges {
    regions: Vec<OciRegion>,
}

#[derive(Debug, Deserialize)]
struct OciRegion {
    region: String,
    cidrs: Vec<OciCidr>,
}

#[derive(Debug, Deserialize)]
struct OciCidr {
    cidr: String,
    tags: Vec<String>,
}

/// OCI range feed.
pub struct Oci {
    feed_url: String,
}

impl Default for Oci {
    fn default() -> Self {
        Self {
            feed_url: FEED_URL.to_string(),
        }
    }
}

impl Oci {
    /// Use an alternate feed endpoint.
    pub fn with_feed_url(feed_url: impl Into<String>) -> Self {
        Self {
            feed_url: feed_url.into(),
        }
    }
}

#[async_trait]
impl RangeProvider for Oci {
    fn name(&self) -> &'static str {
        "OCI"
    }

    async fn check(&self, http: &Client, target: IpAddr) -> FetchResult<bool> {
        let doc: OciRanges = http::fetch_json(http, &self.feed_url).await?;
        let matches = scan(&doc, target)?;
        log_matches(self.name(), &matches);
        Ok(!matches.is_empty())
    }
}

/// Collect every cidr entry containing the target, across all regions.
fn scan(doc: &OciRanges, target: IpAddr) -> FetchResult<Vec<RangeMatch>> {
    let mut matches = Vec::new();

    for region in &doc.regions {
        for entry in &region.cidrs {
            if net::cidr_contains(&entry.cidr, target)? {
                let service = entry
                    .tags
                    .last()
                    .ok_or_else(|| FetchError::Parse("cidr entry without tags".into()))?;
                matches.push(RangeMatch {
                    prefix: entry.cidr.clone(),
                    region: region.region.clone(),
                    service: service.clone(),
                });
            }
        }
    }

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"{
        "last_updated_timestamp": "2025-01-01T00:00:00.000000",
        "regions": [
            {"region": "us-phoenix-1", "cidrs": [
                {"cidr": "129.146.0.0/21", "tags": ["OCI"]},
                {"cidr": "129.146.64.0/22", "tags": ["OCI", "OBJECT_STORAGE"]}
            ]},
            {"region": "eu-frankfurt-1", "cidrs": [
                {"cidr": "130.61.0.0/16", "tags": ["OCI"]}
            ]}
        ]
    }"#;

    fn parse(json: &str) -> OciRanges {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_match_uses_last_tag_and_region_name() {
        let doc = parse(FEED);
        let matches = scan(&doc, "129.146.64.10".parse().unwrap()).unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].prefix, "129.146.64.0/22");
        assert_eq!(matches[0].region, "us-phoenix-1");
        assert_eq!(matches[0].service, "OBJECT_STORAGE");
    }

    #[test]
    fn test_match_in_second_region() {
        let doc = parse(FEED);
        let matches = scan(&doc, "130.61.5.5".parse().unwrap()).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].region, "eu-frankfurt-1");
    }

    #[test]
    fn test_no_match() {
        let doc = parse(FEED);
        assert!(scan(&doc, "8.8.8.8".parse().unwrap()).unwrap().is_empty());
    }

    #[test]
    fn test_matching_entry_without_tags_is_parse_error() {
        let doc = parse(
            r#"{"regions": [
                {"region": "us-phoenix-1", "cidrs": [{"cidr": "129.146.0.0/21", "tags": []}]}
            ]}"#,
        );
        let result = scan(&doc, "129.146.1.1".parse().unwrap());
        assert!(matches!(result, Err(FetchError::Parse(_))));
    }
}
