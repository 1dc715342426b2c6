//! Azure published IP ranges.
//!
//! Azure does not publish a stable feed URL. The weekly JSON document is
//! discovered from a download confirmation page: the first anchor whose
//! `class` contains `failoverLink` and whose `href` points under
//! `download.microsoft.com/download/`. The discovered document has shape
//! `{"values": [{"properties": {"addressPrefixes": [], "region",
//! "systemService"}}]}`.

use crate::error::{FetchError, FetchResult};
use crate::http;
use crate::net;
use crate::providers::{log_matches, RangeMatch, RangeProvider};
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use std::net::IpAddr;
use std::sync::OnceLock;
use tracing::debug;

const CONFIRMATION_URL: &str =
    "https://www.microsoft.com/en-us/download/confirmation.aspx?id=56519";

#[derive(Debug, Deserialize)]
struct AzureRanges {
    values: Vec<AzureValue>,
}

#[derive(Debug, Deserialize)]
struct AzureValue {
    properties: AzureProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AzureProperties {
    address_prefixes: Vec<String>,
    region: String,
    system_service: String,
}

/// Azure range feed.
pub struct Azure {
    confirmation_url: String,
}

impl Default for Azure {
    fn default() -> Self {
        Self {
            confirmation_url: CONFIRMATION_URL.to_string(),
        }
    }
}

impl Azure {
    /// Use an alternate confirmation page endpoint.
    pub fn with_confirmation_url(confirmation_url: impl Into<String>) -> Self {
        Self {
            confirmation_url: confirmation_url.into(),
        }
    }
}

#[async_trait]
impl RangeProvider for Azure {
    fn name(&self) -> &'static str {
        "Azure"
    }

    async fn check(&self, http: &Client, target: IpAddr) -> FetchResult<bool> {
        let page = http::fetch_text(http, &self.confirmation_url).await?;
        let download_url = discover_download_url(&page)?;
        debug!("Azure feed URL: {}", download_url);

        let doc: AzureRanges = http::fetch_json(http, &download_url).await?;
        let matches = scan(&doc, target)?;
        log_matches(self.name(), &matches);
        Ok(!matches.is_empty())
    }
}

/// Extract the feed URL from the confirmation page.
///
/// Attribute order within the anchor tag is not fixed, so the class and href
/// conditions are checked independently on each tag.
fn discover_download_url(page: &str) -> FetchResult<String> {
    static ANCHOR: OnceLock<Regex> = OnceLock::new();
    static CLASS: OnceLock<Regex> = OnceLock::new();
    static HREF: OnceLock<Regex> = OnceLock::new();

    let anchor = ANCHOR.get_or_init(|| Regex::new(r"(?s)<a\s[^>]*>").expect("anchor regex"));
    let class = CLASS
        .get_or_init(|| Regex::new(r#"class="[^"]*failoverLink"#).expect("class regex"));
    let href = HREF.get_or_init(|| {
        Regex::new(r#"href="([^"]*download\.microsoft\.com/download/[^"]*)""#)
            .expect("href regex")
    });

    for tag in anchor.find_iter(page) {
        let tag = tag.as_str();
        if !class.is_match(tag) {
            continue;
        }
        if let Some(captures) = href.captures(tag) {
            return Ok(captures[1].to_string());
        }
    }

    Err(FetchError::LinkNotFound)
}

/// Collect every address prefix containing the target, across all values.
fn scan(doc: &AzureRanges, target: IpAddr) -> FetchResult<Vec<RangeMatch>> {
    let mut matches = Vec::new();

    for value in &doc.values {
        for prefix in &value.properties.address_prefixes {
            if net::cidr_contains(prefix, target)? {
                matches.push(RangeMatch {
                    prefix: prefix.clone(),
                    region: value.properties.region.clone(),
                    service: value.properties.system_service.clone(),
                });
            }
        }
    }

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <a href="https://www.microsoft.com/en-us/download" class="nav-link">Downloads</a>
        <a class="mscom-link failoverLink"
           href="https://download.microsoft.com/download/7/1/d/ServiceTags_Public_20250101.json">
           click here to download manually</a>
        <a class="failoverLink" href="https://download.microsoft.com/download/other.json">dup</a>
        </body></html>
    "#;

    #[test]
    fn test_discover_first_matching_link() {
        let url = discover_download_url(PAGE).unwrap();
        assert_eq!(
            url,
            "https://download.microsoft.com/download/7/1/d/ServiceTags_Public_20250101.json"
        );
    }

    #[test]
    fn test_discover_href_before_class() {
        let page = r#"<a href="https://download.microsoft.com/download/x.json"
                         class="failoverLink">dl</a>"#;
        assert_eq!(
            discover_download_url(page).unwrap(),
            "https://download.microsoft.com/download/x.json"
        );
    }

    #[test]
    fn test_discover_requires_both_conditions() {
        // failoverLink class but wrong host, and right host without the class
        let page = r#"
            <a class="failoverLink" href="https://example.com/feed.json">x</a>
            <a class="other" href="https://download.microsoft.com/download/y.json">y</a>
        "#;
        assert!(matches!(
            discover_download_url(page),
            Err(FetchError::LinkNotFound)
        ));
    }

    #[test]
    fn test_discover_empty_page() {
        assert!(matches!(
            discover_download_url("<html></html>"),
            Err(FetchError::LinkNotFound)
        ));
    }

    fn parse(json: &str) -> AzureRanges {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_scan_walks_all_prefix_lists() {
        let doc = parse(
            r#"{"values": [
                {"name": "AzureCloud.westeurope", "properties": {
                    "changeNumber": 1, "region": "westeurope", "platform": "Azure",
                    "systemService": "AzureCloud",
                    "addressPrefixes": ["13.69.0.0/17", "2603:1020::/47"]}},
                {"name": "Storage.westeurope", "properties": {
                    "region": "westeurope", "systemService": "AzureStorage",
                    "addressPrefixes": ["13.69.0.0/27"]}}
            ]}"#,
        );
        let matches = scan(&doc, "13.69.0.5".parse().unwrap()).unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].prefix, "13.69.0.0/17");
        assert_eq!(matches[0].service, "AzureCloud");
        assert_eq!(matches[1].prefix, "13.69.0.0/27");
        assert_eq!(matches[1].service, "AzureStorage");
    }

    #[test]
    fn test_scan_no_match() {
        let doc = parse(
            r#"{"values": [{"properties": {
                "region": "westeurope", "systemService": "AzureCloud",
                "addressPrefixes": ["13.69.0.0/17"]}}]}"#,
        );
        assert!(scan(&doc, "8.8.8.8".parse().unwrap()).unwrap().is_empty());
    }
}
