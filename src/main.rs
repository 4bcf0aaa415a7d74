// ec2prefs - AWS EC2 credential profile preferences

mod cli;
mod config;
mod error;
mod models;
mod store;
mod ui;

use clap::Parser;
use error::Result;
use std::fs::OpenOptions;
use std::sync::Mutex;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first to get verbose flag
    let args = cli::Cli::parse();

    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    if args.command.is_none() {
        // For TUI mode, write logs to a file to avoid breaking the UI
        let log_dir = dirs::cache_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("/tmp"))
            .join("ec2prefs");
        std::fs::create_dir_all(&log_dir)?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_dir.join("ec2prefs.log"))?;

        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
            )
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    cli::execute(args).await
}
