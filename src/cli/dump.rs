//! Dump subcommand implementation.
//!
//! Drives the ProtonVPN relay export.

use crate::config::AppSettings;
use crate::error::CliResult;
use crate::http;
use crate::output;
use crate::proton;
use clap::Parser;
use std::path::PathBuf;

/// Export ProtonVPN relay addresses to a CSV file.
#[derive(Parser, Debug)]
pub struct DumpCommand {
    /// Output file path
    #[arg(short, long, value_name = "PATH", default_value = proton::DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

impl DumpCommand {
    /// Execute the export.
    pub async fn execute(&self, settings: &AppSettings) -> CliResult<()> {
        let client = http::build_client(settings)?;
        let count = proton::dump_relays(&client, &self.output).await?;

        output::print_success(&format!(
            "Exported {} relay addresses to {}",
            count,
            self.output.display()
        ));

        Ok(())
    }
}
