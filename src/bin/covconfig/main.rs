//! covconfig CLI - resolve the configuration a coverage run should use

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.global.verbose {
        EnvFilter::new("covconfig=debug")
    } else {
        EnvFilter::new("covconfig=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    // Execute command
    match cli.command {
        Commands::Resolve(args) => commands::resolve::execute(args, &cli.global),
        Commands::Check(args) => commands::check::execute(args, &cli.global),
        Commands::Name(args) => commands::name::execute(args),
        Commands::Completions(args) => commands::completions::execute(args).map(|()| 0),
    }
}
