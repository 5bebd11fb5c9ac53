//! Error types for the task runner
//!
//! Provides structured error handling with context and proper error chains.

use thiserror::Error;

/// Main error type for the task runner
#[derive(Error, Debug)]
pub enum TaskError {
    /// Delegated command execution errors
    #[error("Process error: {command} failed")]
    Process {
        command: String,
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Interactive input errors
    #[error("Input error: {message}")]
    Input {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl TaskError {
    /// Create a new process error
    pub fn process(
        command: impl Into<String>,
        exit_code: Option<i32>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::Process {
            command: command.into(),
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
            source: None,
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new input error
    pub fn input(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Input {
            message: message.into(),
            source,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TaskError>;

/// Map a failed operation to the process exit code the runner should report.
///
/// An operation's own exit status mirrors the exit status of its delegated
/// command, so a `Process` code anywhere in the chain wins. Anything else
/// (spawn failures, validation, I/O) is 1.
pub fn exit_status(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(TaskError::Process {
            exit_code: Some(code),
            ..
        }) = cause.downcast_ref::<TaskError>()
        {
            return *code;
        }
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_status_propagates_delegated_code() {
        let err = anyhow::Error::from(TaskError::process("docker compose build", Some(17), "", ""));
        assert_eq!(exit_status(&err), 17);
    }

    #[test]
    fn test_exit_status_survives_context_wrapping() {
        let result: anyhow::Result<()> =
            Err(TaskError::process("pytest", Some(2), "", "")).context("Failed to run test suite");
        assert_eq!(exit_status(&result.unwrap_err()), 2);
    }

    #[test]
    fn test_exit_status_defaults_to_one() {
        let err = anyhow::Error::from(TaskError::validation("bad service name"));
        assert_eq!(exit_status(&err), 1);

        // Killed by a signal: no exit code to mirror
        let err = anyhow::Error::from(TaskError::process("docker compose logs", None, "", ""));
        assert_eq!(exit_status(&err), 1);
    }
}
