use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use aws_sdk_dynamodb::Client;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dynamodb_query::config::Cli;
use dynamodb_query::interactive::{prompt::TerminalPrompter, session::Session};

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to `--log-level`. Logs go to
/// stderr, results to stdout.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    init_tracing(&cli.log_level)?;

    let sdk_config = cli.sdk_config().await;
    let client = Client::new(&sdk_config);
    let prompter = TerminalPrompter::new().context("failed to open the terminal")?;

    let mut session = Session::new(client, prompter, cli.session_options());
    session.run(&mut io::stdout()).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
