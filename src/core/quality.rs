//! Test and lint operations
//!
//! Runs the test suite inside the main service container and drives the
//! formatter/linter from the isolated tool environment.

use crate::{config::Config, error::Result, utils::process::ProcessRunner};
use tracing::{info, instrument};

/// Runner for the template's test and style tooling
pub struct QualitySuite {
    config: Config,
    process_runner: ProcessRunner,
}

impl QualitySuite {
    /// Create a new quality suite with the given configuration
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            process_runner: ProcessRunner::new(config.debug),
            config,
        }
    }

    /// Run the automated test suite inside the main service container
    #[instrument(skip(self))]
    pub fn test(&self) -> Result<()> {
        info!("Running test suite in {}", self.config.compose.backend_service);
        let tail = self.test_tail();
        self.run_compose(&tail)
    }

    /// Run the tests with coverage measurement and report generation
    #[instrument(skip(self))]
    pub fn coverage(&self) -> Result<()> {
        info!("Running test suite with coverage");
        let tail = self.coverage_tail();
        self.run_compose(&tail)
    }

    /// Auto-format the source and apply lint fixes in place
    #[instrument(skip(self))]
    pub fn format(&self) -> Result<()> {
        info!("Formatting source");
        self.run_linter(&self.format_args())?;
        self.run_linter(&self.fix_args())
    }

    /// Check source style without modifying files
    #[instrument(skip(self))]
    pub fn lint(&self) -> Result<()> {
        info!("Checking source style");
        self.run_linter(&self.check_args())
    }

    fn test_tail(&self) -> Vec<&str> {
        vec!["exec", &self.config.compose.backend_service, "pytest"]
    }

    fn coverage_tail(&self) -> Vec<&str> {
        let mut tail = self.test_tail();
        tail.extend(self.config.tooling.coverage_args.iter().map(String::as_str));
        tail
    }

    fn format_args(&self) -> Vec<&str> {
        let mut args = vec!["format"];
        args.extend(self.config.tooling.lint_paths.iter().map(String::as_str));
        args
    }

    fn fix_args(&self) -> Vec<&str> {
        let mut args = vec!["check", "--fix"];
        args.extend(self.config.tooling.lint_paths.iter().map(String::as_str));
        args
    }

    fn check_args(&self) -> Vec<&str> {
        let mut args = vec!["check"];
        args.extend(self.config.tooling.lint_paths.iter().map(String::as_str));
        args
    }

    fn run_linter(&self, args: &[&str]) -> Result<()> {
        let linter = self.config.tooling.venv_bin("ruff");
        self.process_runner
            .run_command(&linter.to_string_lossy(), args)
    }

    fn run_compose(&self, tail: &[&str]) -> Result<()> {
        let (program, args) = self.config.compose_invocation(tail);
        let arg_strs: Vec<&str> = args.iter().map(String::as_str).collect();
        self.process_runner.run_command(&program, &arg_strs)
    }
}
