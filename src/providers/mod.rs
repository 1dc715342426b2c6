//! Provider feed checks.
//!
//! One module per provider feed, each implementing the [`RangeProvider`]
//! trait. Providers are consulted strictly in order; a failure in one is
//! logged and treated as a non-match without disturbing the others.

pub mod aws;
pub mod azure;
pub mod digitalocean;
pub mod gcp;
pub mod oci;

use crate::error::FetchResult;
use async_trait::async_trait;
use reqwest::Client;
use std::net::IpAddr;
use tracing::{error, info};

pub use aws::Aws;
pub use azure::Azure;
pub use digitalocean::DigitalOcean;
pub use gcp::Gcp;
pub use oci::Oci;

/// A single containing range found in a provider feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeMatch {
    /// The CIDR prefix that contained the target.
    pub prefix: String,
    /// Region or location label reported by the feed.
    pub region: String,
    /// Service or category label reported by the feed.
    pub service: String,
}

/// A published IP-range feed that can be checked against a target address.
#[async_trait]
pub trait RangeProvider: Send + Sync {
    /// Human-readable provider name used in log output.
    fn name(&self) -> &'static str;

    /// Fetch the provider's feed and test the target against every prefix.
    ///
    /// Logs one line per containing entry and returns whether any entry
    /// contained the target.
    async fn check(&self, http: &Client, target: IpAddr) -> FetchResult<bool>;
}

/// The built-in providers in their fixed query order.
pub fn default_providers() -> Vec<Box<dyn RangeProvider>> {
    vec![
        Box::new(Aws::default()),
        Box::new(Azure::default()),
        Box::new(Gcp::default()),
        Box::new(Oci::default()),
        Box::new(DigitalOcean::default()),
    ]
}

/// Check the target address against every provider, in order.
///
/// A provider failure is logged and counts as a non-match; the remaining
/// providers are still consulted. Returns true if any provider matched.
pub async fn run_checks(
    providers: &[Box<dyn RangeProvider>],
    http: &Client,
    target: IpAddr,
) -> bool {
    let mut matched = false;

    for provider in providers {
        info!("Checking for {}", provider.name());
        match provider.check(http, target).await {
            Ok(hit) => matched |= hit,
            Err(e) => error!("{}: {}", provider.name(), e),
        }
    }

    matched
}

/// Log every containing entry for a provider, in the common
/// prefix/region/service shape.
pub(crate) fn log_matches(provider: &str, matches: &[RangeMatch]) {
    for m in matches {
        info!(
            "Match for {} range \"{}\", region \"{}\" and service \"{}\"",
            provider, m.prefix, m.region, m.service
        );
    }
}
