//! cloudhound binary entry point.

use clap::Parser;
use cloudhound::cli::{CheckCommand, Cli, Commands};
use cloudhound::config::AppSettings;
use cloudhound::error::{CliError, CliResult};
use cloudhound::output;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(&cli);

    // Exit codes: 1 = target matched a provider range, 0 = no match,
    // 2 = usage or runtime error.
    let code = match run(cli).await {
        Ok(true) => 1,
        Ok(false) => 0,
        Err(e) => {
            output::print_error(&e.to_string());
            2
        }
    };

    process::exit(code);
}

/// Install the process-wide diagnostics sink.
fn init_tracing(cli: &Cli) {
    let filter = if cli.quiet {
        EnvFilter::new("off")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> CliResult<bool> {
    let settings = match &cli.config {
        Some(path) => AppSettings::load_from(path)?,
        None => AppSettings::load()?,
    };

    match cli.command {
        Some(Commands::Check(cmd)) => cmd.execute(&settings).await,
        Some(Commands::Dump(cmd)) => {
            cmd.execute(&settings).await?;
            Ok(false)
        }
        None => match cli.legacy_target {
            Some(ip) => CheckCommand { ip }.execute(&settings).await,
            None => Err(CliError::Other(
                "no target given; try 'cloudhound check <IP>'".to_string(),
            )),
        },
    }
}
