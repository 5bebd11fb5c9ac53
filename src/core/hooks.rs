//! Commit-hook tooling setup
//!
//! Creates the isolated tool environment, installs the pinned development
//! tooling into it, and registers the commit-time hook runner.

use crate::{config::Config, error::Result, utils::process::ProcessRunner};
use tracing::{info, instrument};

/// Installer for the commit-time hook tooling
pub struct HookInstaller {
    config: Config,
    process_runner: ProcessRunner,
}

impl HookInstaller {
    /// Create a new hook installer with the given configuration
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            process_runner: ProcessRunner::new(config.debug),
            config,
        }
    }

    /// Create the tool environment, install pinned tooling, register the hook
    #[instrument(skip(self))]
    pub fn install(&self) -> Result<()> {
        let tooling = &self.config.tooling;
        let venv_dir = tooling.venv_dir.to_string_lossy();

        info!("Creating tool environment in {}", venv_dir);
        self.process_runner
            .run_command(&tooling.python, &["-m", "venv", venv_dir.as_ref()])?;

        let pip = tooling.venv_bin("pip");
        let dev_requirements = tooling.dev_requirements.to_string_lossy();
        info!("Installing pinned tooling from {}", dev_requirements);
        self.process_runner.run_command(
            &pip.to_string_lossy(),
            &["install", "-r", dev_requirements.as_ref()],
        )?;

        let pre_commit = tooling.venv_bin("pre-commit");
        info!("Registering commit hook");
        self.process_runner
            .run_command(&pre_commit.to_string_lossy(), &["install"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_tooling_paths_resolve_into_the_venv() {
        let installer = HookInstaller::new(Config::default());
        let tooling = &installer.config.tooling;
        assert_eq!(tooling.venv_bin("pip"), Path::new(".venv/bin/pip"));
        assert_eq!(
            tooling.venv_bin("pre-commit"),
            Path::new(".venv/bin/pre-commit")
        );
        assert_eq!(tooling.dev_requirements, Path::new("requirements-dev.txt"));
    }
}
