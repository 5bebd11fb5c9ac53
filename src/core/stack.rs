//! Container stack lifecycle operations
//!
//! Wraps the orchestrator for building, starting, stopping, and inspecting
//! the template's services, including the background worker pair, and owns
//! the cache cleanup performed by `clean`.

use crate::{config::Config, error::Result, utils::process::ProcessRunner};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Manager for the containerized service stack
pub struct StackManager {
    config: Config,
    process_runner: ProcessRunner,
}

impl StackManager {
    /// Create a new stack manager with the given configuration
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            process_runner: ProcessRunner::new(config.debug),
            config,
        }
    }

    /// Build the container images
    #[instrument(skip(self))]
    pub fn build(&self) -> Result<()> {
        info!("Building container images");
        self.run_compose(&["build"])
    }

    /// Start all services detached and announce their URLs
    #[instrument(skip(self))]
    pub fn up(&self) -> Result<()> {
        info!("Starting services in the background");
        self.run_compose(&["up", "-d"])?;

        println!("Services are up:");
        for service in &self.config.compose.service_urls {
            println!("  {}: {}", service.label, service.url);
        }

        Ok(())
    }

    /// Stop all services
    #[instrument(skip(self))]
    pub fn down(&self) -> Result<()> {
        info!("Stopping services");
        self.run_compose(&["down"])
    }

    /// Restart all services
    #[instrument(skip(self))]
    pub fn restart(&self) -> Result<()> {
        info!("Restarting services");
        self.run_compose(&["restart"])
    }

    /// Stream logs from all services until interrupted
    #[instrument(skip(self))]
    pub fn logs(&self) -> Result<()> {
        info!("Streaming service logs, interrupt to stop");
        self.run_compose(&["logs", "-f"])
    }

    /// Open an interactive shell inside the main service container
    #[instrument(skip(self))]
    pub fn shell(&self) -> Result<()> {
        info!("Opening shell in {}", self.config.compose.backend_service);
        let tail = self.shell_tail();
        self.run_compose(&tail)
    }

    /// Stream logs from the background worker and its scheduler
    #[instrument(skip(self))]
    pub fn worker_logs(&self) -> Result<()> {
        info!("Streaming worker logs, interrupt to stop");
        let tail = self.worker_logs_tail();
        self.run_compose(&tail)
    }

    /// Open an interactive shell inside the worker container
    #[instrument(skip(self))]
    pub fn worker_shell(&self) -> Result<()> {
        info!("Opening shell in {}", self.config.compose.worker_service);
        let tail = self.worker_shell_tail();
        self.run_compose(&tail)
    }

    /// Tear the stack down and delete local caches.
    ///
    /// The cache sweep runs even when the teardown fails, so a half-started
    /// stack never blocks cleanup.
    #[instrument(skip(self))]
    pub fn clean(&self) -> Result<()> {
        info!("Stopping services and removing volumes, local images, and orphans");
        if let Err(e) = self.run_compose(&["down", "-v", "--rmi", "local", "--remove-orphans"]) {
            warn!("Stack teardown failed, continuing with cache cleanup: {}", e);
        }

        self.sweep_caches(Path::new("."))
    }

    fn shell_tail(&self) -> Vec<&str> {
        vec![
            "exec",
            &self.config.compose.backend_service,
            &self.config.compose.shell,
        ]
    }

    fn worker_logs_tail(&self) -> Vec<&str> {
        vec![
            "logs",
            "-f",
            &self.config.compose.worker_service,
            &self.config.compose.scheduler_service,
        ]
    }

    fn worker_shell_tail(&self) -> Vec<&str> {
        vec![
            "exec",
            &self.config.compose.worker_service,
            &self.config.compose.shell,
        ]
    }

    /// Remove the fixed cache directories and every bytecode cache under root
    fn sweep_caches(&self, root: &Path) -> Result<()> {
        for dir in &self.config.caches.dirs {
            let path = root.join(dir);
            match std::fs::remove_dir_all(&path) {
                Ok(()) => debug!("Removed cache directory: {}", path.display()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    debug!("Cache directory does not exist: {}", path.display());
                }
                Err(e) => warn!("Failed to remove {}: {}", path.display(), e),
            }
        }

        let pattern = format!(
            "{}/{}",
            root.display(),
            self.config.caches.bytecode_pattern
        );
        if let Ok(paths) = glob::glob(&pattern) {
            for path in paths.flatten() {
                if let Err(e) = std::fs::remove_dir_all(&path) {
                    warn!("Failed to remove {}: {}", path.display(), e);
                } else {
                    debug!("Removed bytecode cache: {}", path.display());
                }
            }
        }

        Ok(())
    }

    fn run_compose(&self, tail: &[&str]) -> Result<()> {
        let (program, args) = self.config.compose_invocation(tail);
        let arg_strs: Vec<&str> = args.iter().map(String::as_str).collect();
        self.process_runner.run_command(&program, &arg_strs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn test_manager() -> StackManager {
        StackManager::new(Config::default())
    }

    #[test]
    fn test_shell_targets_backend_service() {
        let manager = test_manager();
        assert_eq!(manager.shell_tail(), vec!["exec", "backend", "bash"]);
    }

    #[test]
    fn test_worker_logs_cover_worker_and_scheduler() {
        let manager = test_manager();
        assert_eq!(
            manager.worker_logs_tail(),
            vec!["logs", "-f", "celery-worker", "celery-beat"]
        );
    }

    #[test]
    fn test_worker_shell_targets_worker_service() {
        let manager = test_manager();
        assert_eq!(
            manager.worker_shell_tail(),
            vec!["exec", "celery-worker", "bash"]
        );
    }

    #[test]
    fn test_sweep_removes_all_cache_directories() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();

        for dir in ["htmlcov", ".pytest_cache", ".ruff_cache"] {
            fs::create_dir(root.join(dir)).unwrap();
            fs::write(root.join(dir).join("data"), "cached").unwrap();
        }
        let nested = root.join("app").join("items").join("__pycache__");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("tasks.cpython-312.pyc"), "bytecode").unwrap();
        fs::create_dir(root.join("uploads")).unwrap();

        let manager = test_manager();
        manager.sweep_caches(root).unwrap();

        assert!(!root.join("htmlcov").exists());
        assert!(!root.join(".pytest_cache").exists());
        assert!(!root.join(".ruff_cache").exists());
        assert!(!nested.exists());
        // Unrelated directories survive the sweep
        assert!(root.join("uploads").exists());
        assert!(root.join("app").join("items").exists());
    }

    #[test]
    fn test_sweep_tolerates_missing_caches() {
        let temp_dir = tempfile::tempdir().unwrap();
        let manager = test_manager();
        assert!(manager.sweep_caches(temp_dir.path()).is_ok());
    }
}
