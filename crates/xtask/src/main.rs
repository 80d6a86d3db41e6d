//! Development tasks for the sheet engine
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod dirs;

use anyhow::Result;
use clap::Parser;
use commands::{Attributes, CheckContent, Explain};

/// Development tasks for the sheet engine
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for the character sheet engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Explain how each attribute of a character is computed
    Explain(Explain),

    /// List registered attributes
    Attributes(Attributes),

    /// Load and validate a content directory
    CheckContent(CheckContent),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for SHEET_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Explain(cmd) => cmd.execute(),
        Command::Attributes(cmd) => cmd.execute(),
        Command::CheckContent(cmd) => cmd.execute(),
    }
}
