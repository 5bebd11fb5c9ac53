//! # Devstack
//!
//! Task runner for the FastAPI + Celery containerized web template. Every
//! operation is a thin wrapper that delegates to an external tool with fixed
//! arguments: the container orchestrator for the stack lifecycle, the test
//! runner and linter for quality checks, the migration tool for the schema,
//! and the two package managers for dependency updates.
//!
//! ## Features
//!
//! - One discoverable table of named operations
//! - Faithful exit-status propagation from the delegated command
//! - Streaming and interactive operations inherit the terminal
//! - Teardown plus cache cleanup in a single `clean` operation
//!
//! ## Example
//!
//! ```no_run
//! use devstack::{config::Config, core::StackManager};
//!
//! let stack = StackManager::new(Config::default());
//! stack.up()?;
//! # Ok::<(), devstack::error::TaskError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
