//! Process execution utilities
//!
//! Runs delegated commands with inherited standard streams so streaming and
//! interactive operations behave like the tool was invoked directly.

use crate::error::{Result, TaskError};
use std::process::Command;
use tracing::{debug, info, instrument};

/// Utility for running delegated external commands
#[derive(Debug)]
pub struct ProcessRunner {
    debug: bool,
}

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Run a command with arguments, inheriting stdin/stdout/stderr.
    ///
    /// The child owns the terminal until it exits: log streaming blocks until
    /// the user interrupts it, and container shells stay interactive. A
    /// non-zero exit is returned as a `Process` error carrying the child's
    /// exit code.
    #[instrument(skip(self))]
    pub fn run_command(&self, command: &str, args: &[&str]) -> Result<()> {
        let cmd_str = format!("{} {}", command, args.join(" "));

        if self.debug {
            debug!("Running command: {}", cmd_str);
        } else {
            info!("+ {}", cmd_str);
        }

        let status = Command::new(command).args(args).status().map_err(|e| {
            TaskError::process(
                cmd_str.clone(),
                None,
                String::new(),
                format!("Failed to execute command: {e}"),
            )
        })?;

        if !status.success() {
            let exit_code = status.code();
            return Err(TaskError::process(
                cmd_str,
                exit_code,
                String::new(),
                format!("Command failed with exit code: {exit_code:?}"),
            ));
        }

        debug!("Command completed successfully");
        Ok(())
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_runner_creation() {
        let runner = ProcessRunner::new(true);
        assert!(runner.debug);

        let runner = ProcessRunner::default();
        assert!(!runner.debug);
    }

    #[test]
    fn test_run_simple_command() {
        let runner = ProcessRunner::new(false);
        let result = runner.run_command("echo", &["hello"]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_failing_command_preserves_exit_code() {
        let runner = ProcessRunner::new(false);
        let result = runner.run_command("false", &[]);
        assert!(result.is_err());

        if let Err(TaskError::Process {
            command, exit_code, ..
        }) = result
        {
            assert_eq!(command, "false ");
            assert_eq!(exit_code, Some(1));
        } else {
            panic!("Expected Process error");
        }
    }

    #[test]
    fn test_run_missing_command() {
        let runner = ProcessRunner::new(false);
        let result = runner.run_command("nonexistent_command_12345", &[]);

        if let Err(TaskError::Process { exit_code, .. }) = result {
            // Spawn failure: there is no child exit code to mirror
            assert_eq!(exit_code, None);
        } else {
            panic!("Expected Process error");
        }
    }
}
