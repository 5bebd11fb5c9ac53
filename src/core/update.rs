//! Dependency update operations
//!
//! Upgrades the pinned Python dependencies on the host and the frontend
//! dependencies inside their own service container.

use crate::{config::Config, error::Result, utils::process::ProcessRunner};
use tracing::{info, instrument};

/// Runner for the two dependency ecosystems
pub struct DependencyUpdater {
    config: Config,
    process_runner: ProcessRunner,
}

impl DependencyUpdater {
    /// Create a new dependency updater with the given configuration
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            process_runner: ProcessRunner::new(config.debug),
            config,
        }
    }

    /// Upgrade pip itself, then every pinned requirement
    #[instrument(skip(self))]
    pub fn python(&self) -> Result<()> {
        info!("Upgrading Python dependencies");
        let python = &self.config.tooling.python;

        self.process_runner
            .run_command(python, &["-m", "pip", "install", "--upgrade", "pip"])?;

        let requirements = self.config.tooling.requirements.to_string_lossy();
        self.process_runner.run_command(
            python,
            &["-m", "pip", "install", "--upgrade", "-r", requirements.as_ref()],
        )
    }

    /// Upgrade frontend dependencies inside the frontend container
    #[instrument(skip(self))]
    pub fn frontend(&self) -> Result<()> {
        info!("Upgrading frontend dependencies");
        let tail = self.frontend_tail();
        let (program, args) = self.config.compose_invocation(&tail);
        let arg_strs: Vec<&str> = args.iter().map(String::as_str).collect();
        self.process_runner.run_command(&program, &arg_strs)
    }

    fn frontend_tail(&self) -> Vec<&str> {
        vec![
            "run",
            "--rm",
            &self.config.compose.frontend_service,
            "npm",
            "update",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_runs_npm_in_its_container() {
        let updater = DependencyUpdater::new(Config::default());
        assert_eq!(
            updater.frontend_tail(),
            vec!["run", "--rm", "frontend", "npm", "update"]
        );
    }
}
