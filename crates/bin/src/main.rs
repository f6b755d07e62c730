use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod document;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Initialize tracing; stdout carries command output, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("colltools=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, format = ?cli.format, "starting");

    match &cli.command {
        Commands::Merge(args) => commands::merge::run(args, cli.format, cli.pretty)?,
        Commands::Equal(args) => {
            if !commands::equal::run(args, cli.format)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Keys(args) => commands::keys::run(args, cli.format, cli.pretty)?,
        Commands::Empty(args) => {
            commands::empty::run(args, cli.format)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
