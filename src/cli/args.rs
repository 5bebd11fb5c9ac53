//! Command-line argument parsing and validation

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Devstack - task runner for the containerized web template
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "devstack")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Additional compose file passed to every orchestrator invocation
    #[arg(short = 'f', long = "compose-file", global = true)]
    pub compose_file: Vec<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the container images
    Build,

    /// Start all services in the background and print their URLs
    Up,

    /// Stop all services
    Down,

    /// Restart all services
    Restart,

    /// Stream logs from all services until interrupted
    Logs,

    /// Open an interactive shell in the main service container
    Shell,

    /// Run the test suite in the main service container
    Test,

    /// Run the tests with coverage reports
    Coverage,

    /// Auto-format and auto-fix the source in place
    Format,

    /// Check source style without modifying files
    Lint,

    /// Apply all pending schema migrations
    Migrate,

    /// Generate a new migration from a message
    Makemigrations {
        /// Migration message; prompted for when omitted
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Upgrade pip and the pinned Python dependencies
    UpdatePython,

    /// Upgrade frontend dependencies in the frontend container
    UpdateFrontend,

    /// Create the tool environment and register the commit hook
    PreCommitInstall,

    /// Stream logs from the worker and its scheduler until interrupted
    CeleryLogs,

    /// Open an interactive shell in the worker container
    CeleryShell,

    /// Tear the stack down and delete local caches
    Clean,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
