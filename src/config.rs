//! Configuration management for the task runner
//!
//! Centralizes the fixed operation table (orchestrator invocation, service
//! names, tool paths, cache locations) and provides validation.

use crate::{cli::Args, error::TaskError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Container orchestrator configuration
    pub compose: ComposeConfig,
    /// Host-side tooling configuration
    pub tooling: ToolingConfig,
    /// Local cache directories removed by `clean`
    pub caches: CacheConfig,
}

/// Container orchestrator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeConfig {
    /// Orchestrator executable
    pub program: String,
    /// Leading arguments selecting the compose subsystem
    pub base_args: Vec<String>,
    /// Additional compose files injected with `-f`
    pub files: Vec<PathBuf>,
    /// Main request-serving service
    pub backend_service: String,
    /// Frontend service
    pub frontend_service: String,
    /// Background task worker service
    pub worker_service: String,
    /// Worker scheduler service
    pub scheduler_service: String,
    /// Shell launched inside containers
    pub shell: String,
    /// URLs printed after a detached start
    pub service_urls: Vec<ServiceUrl>,
}

/// A labelled URL announced by the `up` operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceUrl {
    pub label: String,
    pub url: String,
}

/// Host-side tooling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolingConfig {
    /// Host Python interpreter
    pub python: String,
    /// Isolated tool environment directory
    pub venv_dir: PathBuf,
    /// Pinned runtime dependencies
    pub requirements: PathBuf,
    /// Pinned development tooling
    pub dev_requirements: PathBuf,
    /// Extra arguments for the coverage run
    pub coverage_args: Vec<String>,
    /// Paths handed to the formatter/linter
    pub lint_paths: Vec<String>,
}

/// Cache directories removed by `clean`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Fixed cache directories at the project root
    pub dirs: Vec<PathBuf>,
    /// Glob matching bytecode cache directories anywhere in the tree
    pub bytecode_pattern: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            compose: ComposeConfig::default(),
            tooling: ToolingConfig::default(),
            caches: CacheConfig::default(),
        }
    }
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            program: "docker".to_string(),
            base_args: vec!["compose".to_string()],
            files: Vec::new(),
            backend_service: "backend".to_string(),
            frontend_service: "frontend".to_string(),
            worker_service: "celery-worker".to_string(),
            scheduler_service: "celery-beat".to_string(),
            shell: "bash".to_string(),
            service_urls: vec![
                ServiceUrl {
                    label: "Backend".to_string(),
                    url: "http://localhost:8000".to_string(),
                },
                ServiceUrl {
                    label: "API docs".to_string(),
                    url: "http://localhost:8000/docs".to_string(),
                },
                ServiceUrl {
                    label: "Frontend".to_string(),
                    url: "http://localhost:3000".to_string(),
                },
            ],
        }
    }
}

impl Default for ToolingConfig {
    fn default() -> Self {
        Self {
            python: "python3".to_string(),
            venv_dir: PathBuf::from(".venv"),
            requirements: PathBuf::from("requirements.txt"),
            dev_requirements: PathBuf::from("requirements-dev.txt"),
            coverage_args: vec![
                "--cov=app".to_string(),
                "--cov-report=html".to_string(),
                "--cov-report=term-missing".to_string(),
            ],
            lint_paths: vec![".".to_string()],
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dirs: vec![
                PathBuf::from("htmlcov"),
                PathBuf::from(".pytest_cache"),
                PathBuf::from(".ruff_cache"),
            ],
            bytecode_pattern: "**/__pycache__".to_string(),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, TaskError> {
        let mut config = Self {
            debug: args.debug,
            ..Self::default()
        };

        config.compose.files = args.compose_file.clone();

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), TaskError> {
        if self.compose.program.is_empty() {
            return Err(TaskError::validation("Orchestrator program is empty"));
        }

        for service in [
            &self.compose.backend_service,
            &self.compose.frontend_service,
            &self.compose.worker_service,
            &self.compose.scheduler_service,
        ] {
            if service.is_empty() {
                return Err(TaskError::validation("Service name is empty"));
            }
        }

        for file in &self.compose.files {
            if !file.exists() {
                return Err(TaskError::validation(format!(
                    "Compose file not found: {}",
                    file.display()
                )));
            }
        }

        Ok(())
    }

    /// Get the orchestrator command with its leading arguments
    pub fn compose_cmd(&self) -> (String, Vec<String>) {
        let mut args = self.compose.base_args.clone();
        for file in &self.compose.files {
            args.push("-f".to_string());
            args.push(file.to_string_lossy().to_string());
        }
        (self.compose.program.clone(), args)
    }

    /// Get a full orchestrator invocation with the given trailing arguments
    pub fn compose_invocation(&self, tail: &[&str]) -> (String, Vec<String>) {
        let (program, mut args) = self.compose_cmd();
        args.extend(tail.iter().map(|s| (*s).to_string()));
        (program, args)
    }
}

impl ToolingConfig {
    /// Path to an executable inside the isolated tool environment
    pub fn venv_bin(&self, tool: &str) -> PathBuf {
        self.venv_dir.join("bin").join(tool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Args, Command};
    use clap::Parser;
    use std::path::Path;

    fn args_for<const N: usize>(argv: [&str; N]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_default_operation_table() {
        let config = Config::default();
        assert_eq!(config.compose.program, "docker");
        assert_eq!(config.compose.base_args, vec!["compose"]);
        assert_eq!(config.compose.backend_service, "backend");
        assert_eq!(config.compose.worker_service, "celery-worker");
        assert_eq!(config.compose.scheduler_service, "celery-beat");
        assert_eq!(config.caches.dirs.len(), 3);
        assert_eq!(config.caches.bytecode_pattern, "**/__pycache__");
    }

    #[test]
    fn test_from_args_sets_debug() {
        let args = args_for(["devstack", "--debug", "build"]);
        let config = Config::from_args(&args).unwrap();
        assert!(config.debug);
        assert!(matches!(args.command, Command::Build));
    }

    #[test]
    fn test_from_args_rejects_missing_compose_file() {
        let args = args_for(["devstack", "-f", "does-not-exist.yml", "up"]);
        let result = Config::from_args(&args);
        assert!(matches!(result, Err(TaskError::Validation { .. })));
    }

    #[test]
    fn test_compose_cmd_injects_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("docker-compose.override.yml");
        std::fs::write(&file, "services: {}\n").unwrap();

        let mut config = Config::default();
        config.compose.files = vec![file.clone()];
        config.validate().unwrap();

        let (program, args) = config.compose_cmd();
        assert_eq!(program, "docker");
        assert_eq!(
            args,
            vec![
                "compose".to_string(),
                "-f".to_string(),
                file.to_string_lossy().to_string()
            ]
        );
    }

    #[test]
    fn test_venv_bin_path() {
        let tooling = ToolingConfig::default();
        assert_eq!(tooling.venv_bin("ruff"), Path::new(".venv/bin/ruff"));
    }
}
