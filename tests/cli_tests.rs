use std::process::{Command, Output};
use std::str;
use tempfile::TempDir;

const GO_EP1_ID: &str = "ddb59aef-6d04-11e5-ba46-22000b92c6ec";

/// Run the binary with an empty configuration and no token environment
fn run_globus(args: &[&str]) -> Output {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");

    Command::new(env!("CARGO_BIN_EXE_globus"))
        .arg("--config")
        .arg(&config_path)
        .args(args)
        .env_remove("GLOBUS_CLI_TRANSFER_TOKEN")
        .env_remove("GLOBUS_CLI_TIMER_TOKEN")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// CLI interface tests
#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_cli_help() {
        let output = run_globus(&["--help"]);
        let stdout = str::from_utf8(&output.stdout).expect("Invalid UTF-8");

        assert!(output.status.success());
        assert!(stdout.contains("Usage:"));
        assert!(stdout.contains("Commands:"));
        assert!(stdout.contains("bookmark"));
        assert!(stdout.contains("endpoint"));
        assert!(stdout.contains("timer"));
        assert!(stdout.contains("--format"));
        assert!(stdout.contains("--jmespath"));
    }

    #[test]
    fn test_cli_bookmark_help() {
        let output = run_globus(&["bookmark", "--help"]);
        let stdout = str::from_utf8(&output.stdout).expect("Invalid UTF-8");

        for subcommand in ["create", "list", "show", "rename", "delete"] {
            assert!(stdout.contains(subcommand), "missing {subcommand}");
        }
    }

    #[test]
    fn test_cli_invalid_command() {
        let output = run_globus(&["invalid-command"]);
        assert_eq!(output.status.code(), Some(2));
    }

    #[test]
    fn test_cli_missing_argument() {
        let output = run_globus(&["bookmark", "show"]);
        assert_eq!(output.status.code(), Some(2));
    }

    #[test]
    fn test_cli_malformed_endpoint_path() {
        let output = run_globus(&["bookmark", "create", "not-an-endpoint", "name"]);
        let stderr = str::from_utf8(&output.stderr).expect("Invalid UTF-8");

        assert_eq!(output.status.code(), Some(2));
        assert!(stderr.contains("ENDPOINT_ID:PATH"));
    }

    #[test]
    fn test_cli_invalid_format() {
        let output = run_globus(&["-F", "yaml", "bookmark", "list"]);
        assert_eq!(output.status.code(), Some(2));
    }

    #[test]
    fn test_transfer_call_no_auth() {
        let output = run_globus(&["bookmark", "list"]);
        let stderr = str::from_utf8(&output.stderr).expect("Invalid UTF-8");

        assert_eq!(output.status.code(), Some(1));
        assert!(stderr.contains("Error: No Authentication provided."));
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn test_server_list_no_auth() {
        let output = run_globus(&["endpoint", "server", "list", GO_EP1_ID]);
        let stderr = str::from_utf8(&output.stderr).expect("Invalid UTF-8");

        assert_eq!(output.status.code(), Some(1));
        assert!(stderr.contains("No Authentication provided."));
    }

    #[test]
    fn test_timer_call_no_auth() {
        let output = run_globus(&["timer", "delete", "4a5f2e19-8e0a-4d2c-8c0b-8d6b3b1f2f61"]);
        let stderr = str::from_utf8(&output.stderr).expect("Invalid UTF-8");

        assert_eq!(output.status.code(), Some(1));
        assert!(stderr.contains("No Authentication provided."));
    }

    #[test]
    fn test_malformed_config_exits_one() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[tokens\n").expect("Failed to write config");

        let output = Command::new(env!("CARGO_BIN_EXE_globus"))
            .arg("--config")
            .arg(&config_path)
            .args(["bookmark", "list"])
            .output()
            .expect("Failed to execute command");
        let stderr = str::from_utf8(&output.stderr).expect("Invalid UTF-8");

        assert_eq!(output.status.code(), Some(1));
        assert!(stderr.contains("Configuration error"));
    }
}
