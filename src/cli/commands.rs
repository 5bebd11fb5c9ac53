//! Command implementations for the CLI

use crate::{
    cli::Command,
    config::Config,
    core::{DependencyUpdater, HookInstaller, MigrationRunner, QualitySuite, StackManager},
    utils::prompt,
};
use anyhow::Context;
use tracing::instrument;

/// Execute the appropriate command based on CLI arguments
#[instrument(skip(config))]
pub fn execute_command(config: &Config, command: &Command) -> anyhow::Result<()> {
    let stack = StackManager::new(config.clone());
    let quality = QualitySuite::new(config.clone());
    let migrations = MigrationRunner::new(config.clone());

    match command {
        Command::Build => stack.build().context("Failed to build images"),
        Command::Up => stack.up().context("Failed to start services"),
        Command::Down => stack.down().context("Failed to stop services"),
        Command::Restart => stack.restart().context("Failed to restart services"),
        Command::Logs => stack.logs().context("Failed to stream logs"),
        Command::Shell => stack.shell().context("Failed to open shell"),
        Command::Test => quality.test().context("Failed to run test suite"),
        Command::Coverage => quality.coverage().context("Failed to run coverage"),
        Command::Format => quality.format().context("Failed to format source"),
        Command::Lint => quality.lint().context("Failed to lint source"),
        Command::Migrate => migrations.apply().context("Failed to apply migrations"),
        Command::Makemigrations { message } => {
            let message = match message {
                Some(message) => message.clone(),
                None => prompt::read_line("Migration message: ")
                    .context("Failed to read migration message")?,
            };
            migrations
                .create(&message)
                .context("Failed to generate migration")
        }
        Command::UpdatePython => DependencyUpdater::new(config.clone())
            .python()
            .context("Failed to update Python dependencies"),
        Command::UpdateFrontend => DependencyUpdater::new(config.clone())
            .frontend()
            .context("Failed to update frontend dependencies"),
        Command::PreCommitInstall => HookInstaller::new(config.clone())
            .install()
            .context("Failed to install commit hooks"),
        Command::CeleryLogs => stack.worker_logs().context("Failed to stream worker logs"),
        Command::CeleryShell => stack.worker_shell().context("Failed to open worker shell"),
        Command::Clean => stack.clean().context("Failed to clean the stack"),
    }
}
