//! ProtonVPN relay export.
//!
//! Fetches the ProtonVPN logical server directory, flattens every relay's
//! entry and exit addresses, and writes them deduplicated and sorted to a
//! single-column CSV. A batch export, not a query: nothing is matched here,
//! and unlike the provider checks, failures are not swallowed.

use crate::error::{CliResult, FetchResult};
use crate::http;
use reqwest::Client;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;

const LOGICALS_URL: &str = "https://api.protonmail.ch/vpn/logicals";

/// Column header of the exported CSV.
pub const CSV_HEADER: &str = "PROTON_IP";

/// Default output filename, written to the working directory.
pub const DEFAULT_OUTPUT: &str = "protonvpn.csv";

#[derive(Debug, Deserialize)]
struct LogicalsResponse {
    #[serde(rename = "LogicalServers")]
    logical_servers: Vec<LogicalServer>,
}

#[derive(Debug, Deserialize)]
struct LogicalServer {
    #[serde(rename = "Servers")]
    servers: Vec<RelayServer>,
}

#[derive(Debug, Deserialize)]
struct RelayServer {
    #[serde(rename = "EntryIP")]
    entry_ip: String,
    #[serde(rename = "ExitIP")]
    exit_ip: String,
}

/// Fetch the relay directory and write the address list to `path`.
///
/// Returns the number of unique addresses written.
pub async fn dump_relays(http: &Client, path: &Path) -> CliResult<usize> {
    let doc = fetch_logicals(http).await?;
    let addrs = collect_addrs(&doc);
    write_csv(&addrs, path)?;

    info!("Wrote {} relay addresses to {}", addrs.len(), path.display());
    Ok(addrs.len())
}

async fn fetch_logicals(http: &Client) -> FetchResult<LogicalsResponse> {
    http::fetch_json(http, LOGICALS_URL).await
}

/// Flatten entry and exit addresses into a deduplicated, sorted set.
fn collect_addrs(doc: &LogicalsResponse) -> BTreeSet<String> {
    let mut addrs = BTreeSet::new();

    for logical in &doc.logical_servers {
        for server in &logical.servers {
            addrs.insert(server.entry_ip.clone());
            addrs.insert(server.exit_ip.clone());
        }
    }

    addrs
}

/// Write the address set as a single-column CSV with the fixed header.
fn write_csv(addrs: &BTreeSet<String>, path: &Path) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([CSV_HEADER])?;
    for addr in addrs {
        writer.write_record([addr.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}
