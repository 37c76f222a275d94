//! # Classes Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Classes CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! - Each top-level command (`quote`, `greet`) is a variant in the `Commands` enum
//! - Running `classes` with no subcommand prints one quote, like `classes quote random`
//! - All errors are propagated to this level, printed, and turned into exit code 1
//!
//! ## Examples
//!
//! ```bash
//! # Print one quote from ./quotes.txt
//! classes
//!
//! # Greet someone, with increased verbosity
//! classes -vv greet --name Ada --time morning
//! ```
//!
use classes::commands;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "classes",
    about = "A greeting Person and a sci-fi quote printer",
    long_about = "Prints a quote from a `quote|speaker` file, or a greeting from a Person.\n\
                  With no subcommand, prints one quote from the configured quotes file.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(alias = "q")]
    Quote(commands::quote::QuoteArgs),
    #[command(alias = "g")]
    Greet(commands::greet::GreetArgs),
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Some(Commands::Quote(args)) => commands::quote::handle_quote(args),
        Some(Commands::Greet(args)) => commands::greet::handle_greet(args),
        None => commands::quote::handle_default(),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
