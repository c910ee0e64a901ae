//! Command-Line Interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Handwriting Screener - Screen handwriting strokes for dysgraphia indicators
#[derive(Parser, Debug)]
#[command(name = "hw-screen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a captured session
    Analyze {
        /// Input session file
        #[arg(short, long)]
        input: PathBuf,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report each prompt separately instead of pooling strokes
        #[arg(long)]
        per_prompt: bool,

        /// Emit JSON regardless of the configured format
        #[arg(long)]
        json: bool,
    },

    /// Check a session file for malformed strokes
    Validate {
        /// Path to session JSON
        session: PathBuf,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// View or reset configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Get a specific configuration value
    Get {
        /// Configuration key (e.g., "validation.strict", "output.format")
        key: String,
    },

    /// Reset configuration to defaults
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
