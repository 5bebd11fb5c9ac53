#![allow(clippy::cargo_common_metadata)]
use devstack::{cli, config::Config, error, setup_logging};

fn main() {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    if let Err(e) = setup_logging(args.debug) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    // Initialize configuration and execute the appropriate command
    let result = Config::from_args(&args)
        .map_err(anyhow::Error::from)
        .and_then(|config| cli::execute_command(&config, &args.command));

    // The runner's exit status mirrors the delegated command's exit status
    if let Err(e) = result {
        tracing::error!("Command execution failed: {e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(error::exit_status(&e));
    }
}

#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;

    fn devstack_cmd() -> Command {
        Command::cargo_bin("devstack").expect("Failed to find devstack binary for testing")
    }

    #[test]
    fn test_help_flag() {
        devstack_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("makemigrations"))
            .stdout(predicate::str::contains("celery-logs"));
    }

    #[test]
    fn test_version_flag() {
        devstack_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_missing_subcommand_fails() {
        devstack_cmd().assert().failure();
    }
}
