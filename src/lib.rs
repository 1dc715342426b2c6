//! # cloudhound - Cloud Provider IP Range Checker
//!
//! cloudhound checks whether an IP address falls within the published
//! IP-range feeds of the major cloud providers, for analysts who need to
//! know quickly whether traffic originates from rented infrastructure.
//!
//! ## Features
//!
//! - **Five Providers**: AWS, Azure, GCP, OCI, and DigitalOcean feeds
//! - **IPv4 and IPv6**: CIDR containment for both address families
//! - **Fault Isolation**: one unreachable feed never hides matches in another
//! - **Typed Feeds**: every provider document is decoded into a schema model
//! - **Relay Export**: dump ProtonVPN entry/exit addresses to CSV
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use cloudhound::config::AppSettings;
//! use cloudhound::providers::{default_providers, run_checks};
//!
//! #[tokio::main]
//! async fn main() {
//!     let settings = AppSettings::default();
//!     let client = cloudhound::http::build_client(&settings).unwrap();
//!
//!     let target = "8.8.8.8".parse().unwrap();
//!     let matched = run_checks(&default_providers(), &client, target).await;
//!
//!     println!("hosted in a known cloud: {}", matched);
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`providers`] - One feed checker per provider and the sweep orchestrator
//! - [`net`] - CIDR containment arithmetic
//! - [`proton`] - ProtonVPN relay export
//! - [`http`] - Shared HTTP client and fetch helpers
//! - [`config`] - Settings and XDG paths
//! - [`error`] - Error types per boundary
//! - [`output`] - Console status lines

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod net;
pub mod output;
pub mod proton;
pub mod providers;

// Re-export commonly used types
pub use error::{CliError, ConfigError, FetchError};
pub use providers::{default_providers, run_checks, RangeMatch, RangeProvider};
