use std::process::ExitCode;

use clap::Parser;
use dbsmoke_core::config::DbConfig;
use dbsmoke_core::db::{self, DbHandle};
use dbsmoke_core::{report, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "One-shot database connectivity smoke test", long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout is reserved for the outcome line.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let _cli = Cli::parse();

    match check().await {
        Ok(_conn) => {
            println!("{}", report::SUCCESS_LINE);
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{}", report::failure_line(&err));
            ExitCode::FAILURE
        }
    }
}

async fn check() -> Result<DbHandle> {
    dotenvy::dotenv().ok();
    let config = DbConfig::from_env()?;
    debug!("database configuration loaded from environment");
    db::connect(&config).await
}
