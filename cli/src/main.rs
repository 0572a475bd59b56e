//! # kbchat Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point for the `kbchat` rule-based customer service chatbot. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handler
//!
//! ## Architecture
//!
//! - `knowledge`: the question/answer store and the keyword matcher
//! - `chat`: request body normalization and reply composition
//! - `commands`: `serve`, `ask` and `check`
//! - `core`: configuration and error types
//!
//! ## Examples
//!
//! ```bash
//! # Run the HTTP service
//! kbchat serve --kb knowledge_base.json
//!
//! # Try a message locally with debug logging
//! kbchat -vv ask "what is your refund policy?"
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod chat;
mod commands;
mod core;
mod knowledge;

#[derive(Parser, Debug)]
#[command(
    name = "kbchat",
    about = "Rule-based customer service chatbot backed by a question/answer knowledge base",
    long_about = "Answers free-text messages by finding the first knowledge base question\n\
                  contained in the message. Serves POST /chat over HTTP or answers locally.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Run the HTTP chat service
    #[command(alias = "s")]
    Serve(commands::serve::ServeArgs),
    /// Answer one message from the command line
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// Validate a knowledge base file
    #[command(alias = "c")]
    Check(commands::check::CheckArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // KBCHAT_* values from a `.env` file; variables already set take precedence.
    let dotenv = dotenvy::dotenv();
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

    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) => tracing::debug!(".env not loaded: {}", e),
    }
    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Serve(args) => commands::serve::handle_serve(args).await,
        Commands::Ask(args) => commands::ask::handle_ask(args).await,
        Commands::Check(args) => commands::check::handle_check(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
