use std::process::ExitCode;

use clap::Parser;
use dependents_finder_lib::{Args, Config};
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize the tracing logger, RUST_LOG overrides the info default
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    dotenv().ok();

    let args = Args::parse();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match dependents_finder_lib::run(&config).await {
        Ok(leads) => {
            for lead in &leads {
                println!("{}", lead);
            }
            info!("Found {} dependent manifest(s)", leads.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Search failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
