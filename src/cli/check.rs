//! Check subcommand implementation.
//!
//! Resolves the target address and runs the provider sweep.

use crate::config::AppSettings;
use crate::error::{CliError, CliResult};
use crate::http;
use crate::providers::{default_providers, run_checks};
use clap::Parser;
use std::net::IpAddr;
use tracing::info;

/// Check an IP address against provider range feeds.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// The IP to evaluate, e.g. 8.8.8.8 or 2600:1900::1
    #[arg(value_name = "IP")]
    pub ip: String,
}

impl CheckCommand {
    /// Execute the check. Returns whether any provider matched.
    pub async fn execute(&self, settings: &AppSettings) -> CliResult<bool> {
        let target: IpAddr = self
            .ip
            .trim()
            .parse()
            .map_err(|_| CliError::InvalidIp(self.ip.clone()))?;

        let client = http::build_client(settings)?;

        info!("Starting IP check for: {}", target);

        let providers = default_providers();
        let matched = run_checks(&providers, &client, target).await;

        info!("Done");

        Ok(matched)
    }
}
