//! `narrative` - render the report described by `narrative.toml`.

use std::process::ExitCode;

use clap::Parser;
use narrative::cli::{Args, run};
use tracing::debug;

fn main() -> ExitCode {
    let args = Args::parse();

    // stdout may carry the document, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!(?args, "starting narrative v{}", env!("CARGO_PKG_VERSION"));

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[narrative] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
