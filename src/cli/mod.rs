//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `cloudhound check <IP>` - Check an IP against provider ranges
//! - `cloudhound dump` - Export ProtonVPN relay addresses to CSV
//!
//! A bare `cloudhound <IP>` is accepted as a shorthand for `check`.

mod check;
mod dump;

pub use check::CheckCommand;
pub use dump::DumpCommand;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cloudhound - Is this IP hosted in a cloud?
///
/// Checks a target address against the published IP-range feeds of AWS,
/// Azure, GCP, OCI, and DigitalOcean, and can export ProtonVPN relay
/// addresses for blocklist tooling.
#[derive(Parser, Debug)]
#[command(name = "cloudhound")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check an IP against cloud provider ranges", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose (debug) log output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to custom configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // Legacy mode: if no subcommand, treat first arg as the target IP
    /// IP to check (legacy mode, use 'cloudhound check' instead)
    #[arg(value_name = "IP", hide = true)]
    pub legacy_target: Option<String>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check an IP address against provider range feeds
    #[command(alias = "c")]
    Check(CheckCommand),

    /// Export ProtonVPN relay addresses to a CSV file
    #[command(alias = "d")]
    Dump(DumpCommand),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_subcommand() {
        let cli = Cli::try_parse_from(["cloudhound", "check", "8.8.8.8"]).unwrap();
        match cli.command {
            Some(Commands::Check(cmd)) => assert_eq!(cmd.ip, "8.8.8.8"),
            _ => panic!("expected check subcommand"),
        }
    }

    #[test]
    fn test_legacy_target() {
        let cli = Cli::try_parse_from(["cloudhound", "8.8.8.8"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.legacy_target.as_deref(), Some("8.8.8.8"));
    }

    #[test]
    fn test_quiet_flag() {
        let cli = Cli::try_parse_from(["cloudhound", "-q", "check", "::1"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_dump_default_output() {
        let cli = Cli::try_parse_from(["cloudhound", "dump"]).unwrap();
        match cli.command {
            Some(Commands::Dump(cmd)) => {
                assert_eq!(cmd.output, PathBuf::from("protonvpn.csv"));
            }
            _ => panic!("expected dump subcommand"),
        }
    }
}
