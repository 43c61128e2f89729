//! chatbox CLI binary.
//!
//! This binary provides command-line access to the chat script parser:
//! - Parse a chat script into its roster and dialogue blocks
//! - Render a chat script into a resolved conversation

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> ExitCode {
    use cli::{Cli, Commands, handle_parse, handle_render};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute the requested command
    let result = match cli.command {
        Commands::Parse {
            document,
            config,
            format,
        } => handle_parse(&document, config.as_deref(), format),

        Commands::Render {
            document,
            config,
            viewer,
            title,
            format,
        } => handle_render(
            &document,
            config.as_deref(),
            viewer.as_deref(),
            title.as_deref(),
            format,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "chatbox failed");
            ExitCode::FAILURE
        }
    }
}
