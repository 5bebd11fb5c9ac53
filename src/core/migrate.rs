//! Schema migration operations
//!
//! Drives the migration tool inside the main service container.

use crate::{config::Config, error::Result, utils::process::ProcessRunner};
use tracing::{info, instrument};

/// Runner for schema migration commands
pub struct MigrationRunner {
    config: Config,
    process_runner: ProcessRunner,
}

impl MigrationRunner {
    /// Create a new migration runner with the given configuration
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            process_runner: ProcessRunner::new(config.debug),
            config,
        }
    }

    /// Apply all pending migrations
    #[instrument(skip(self))]
    pub fn apply(&self) -> Result<()> {
        info!("Applying pending migrations");
        let tail = self.apply_tail();
        self.run_compose(&tail)
    }

    /// Generate a new migration with the given message.
    ///
    /// The message is forwarded verbatim as a single argument, so spaces and
    /// even the empty string survive intact.
    #[instrument(skip(self))]
    pub fn create(&self, message: &str) -> Result<()> {
        info!("Generating migration: {:?}", message);
        let tail = self.create_tail(message);
        self.run_compose(&tail)
    }

    fn apply_tail(&self) -> Vec<&str> {
        vec![
            "exec",
            &self.config.compose.backend_service,
            "alembic",
            "upgrade",
            "head",
        ]
    }

    fn create_tail<'a>(&'a self, message: &'a str) -> Vec<&'a str> {
        vec![
            "exec",
            &self.config.compose.backend_service,
            "alembic",
            "revision",
            "--autogenerate",
            "-m",
            message,
        ]
    }

    fn run_compose(&self, tail: &[&str]) -> Result<()> {
        let (program, args) = self.config.compose_invocation(tail);
        let arg_strs: Vec<&str> = args.iter().map(String::as_str).collect();
        self.process_runner.run_command(&program, &arg_strs)
    }
}
