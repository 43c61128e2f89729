//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// chatbox - turn chat scripts into structured conversations
#[derive(Parser, Debug)]
#[command(name = "chatbox")]
#[command(about = "Turn chat scripts into structured conversations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a chat script into its roster and dialogue blocks
    Parse {
        /// Path to the chat script
        document: PathBuf,

        /// Settings file with the base roster (defaults to layered chatbox.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Resolve a chat script into a conversation
    Render {
        /// Path to the chat script
        document: PathBuf,

        /// Settings file with the base roster (defaults to layered chatbox.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Roster key whose messages are shown as the viewer's own
        #[arg(long)]
        viewer: Option<String>,

        /// Chat title (defaults to the settings title)
        #[arg(long)]
        title: Option<String>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
