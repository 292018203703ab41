//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::infrastructure::BackendKind;

const EXAMPLES: &str = "\
Examples:
  nf make
  nf ls
  nf ls not_exist_file
  nf sleep 2
  nf -l sleeping sleep 2
  nf \"ls | grep .rs\"
  nf -d make
  nf -w 1234 -w 5678 echo jobs done";

/// nf - notification after a command finishes work
#[derive(Parser, Debug)]
#[command(name = "nf")]
#[command(version)]
#[command(about = "Simple command line tool to make notification after target program finished work")]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Add human readable text to custom job identification
    #[arg(short = 'l', long, value_name = "TEXT")]
    pub label: Option<String>,

    /// Print notification text in stdout too
    #[arg(short = 'p', long)]
    pub print: bool,

    /// Do not do annoying notifications
    #[arg(short = 'n', long)]
    pub no_notify: bool,

    /// Save command and stats to the .nf file in the current directory
    #[arg(short = 's', long)]
    pub save: bool,

    /// Notification backend to use instead of auto-detection
    #[arg(short = 'b', long, value_enum, value_name = "BACKEND")]
    pub backend: Option<BackendArg>,

    /// Print debug trace lines to stderr
    #[arg(long)]
    pub debug: bool,

    /// Append debug trace lines to a file
    #[arg(long, value_name = "FILE")]
    pub debug_file: Option<PathBuf>,

    /// Replace the notification title (used by remote relay re-invocation)
    #[arg(long, alias = "custom_notification_title", value_name = "TEXT")]
    pub custom_notification_title: Option<String>,

    /// Replace the notification body (used by remote relay re-invocation)
    #[arg(long, alias = "custom_notification_text", value_name = "TEXT")]
    pub custom_notification_text: Option<String>,

    /// Force the final exit code regardless of the command's outcome
    #[arg(long, alias = "custom_notification_exit_code", value_name = "CODE")]
    pub custom_notification_exit_code: Option<i32>,

    /// Wait for an external PID to exit before running (repeatable)
    #[arg(short = 'w', long = "wait-for-pid", value_name = "PID")]
    pub wait_for_pid: Vec<u32>,

    /// Run detached from the terminal; the parent returns immediately
    #[arg(short = 'd', long)]
    pub detach: bool,

    /// Command to run
    pub cmd: String,

    /// Command arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Backend argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Desktop,
    NotifySend,
    Termux,
    Ssh,
    Stdout,
}

impl From<BackendArg> for BackendKind {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Desktop => BackendKind::Desktop,
            BackendArg::NotifySend => BackendKind::NotifySend,
            BackendArg::Termux => BackendKind::Termux,
            BackendArg::Ssh => BackendKind::SshRelay,
            BackendArg::Stdout => BackendKind::Stdout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_plain_command() {
        let cli = Cli::parse_from(["nf", "ls"]);
        assert_eq!(cli.cmd, "ls");
        assert!(cli.args.is_empty());
        assert!(cli.label.is_none());
        assert!(!cli.print);
        assert!(!cli.no_notify);
        assert!(!cli.save);
        assert!(!cli.detach);
        assert!(cli.wait_for_pid.is_empty());
    }

    #[test]
    fn cli_requires_command() {
        assert!(Cli::try_parse_from(["nf"]).is_err());
    }

    #[test]
    fn cli_parses_command_with_args() {
        let cli = Cli::parse_from(["nf", "ls", "-la", "/tmp"]);
        assert_eq!(cli.cmd, "ls");
        assert_eq!(cli.args, vec!["-la", "/tmp"]);
    }

    #[test]
    fn cli_parses_label() {
        let cli = Cli::parse_from(["nf", "-l", "sleeping", "sleep", "2"]);
        assert_eq!(cli.label, Some("sleeping".to_string()));
        assert_eq!(cli.cmd, "sleep");
        assert_eq!(cli.args, vec!["2"]);
    }

    #[test]
    fn cli_parses_combined_short_flags() {
        let cli = Cli::parse_from(["nf", "-ndp", "sleep", "2"]);
        assert!(cli.no_notify);
        assert!(cli.detach);
        assert!(cli.print);
    }

    #[test]
    fn cli_parses_backend_override() {
        let cli = Cli::parse_from(["nf", "--backend", "notify-send", "ls"]);
        assert_eq!(cli.backend, Some(BackendArg::NotifySend));
    }

    #[test]
    fn cli_parses_custom_notification_fields() {
        let cli = Cli::parse_from([
            "nf",
            "--custom-notification-title",
            "my title",
            "--custom-notification-text",
            "my text",
            "--custom-notification-exit-code",
            "13",
            "true",
        ]);
        assert_eq!(cli.custom_notification_title, Some("my title".to_string()));
        assert_eq!(cli.custom_notification_text, Some("my text".to_string()));
        assert_eq!(cli.custom_notification_exit_code, Some(13));
    }

    #[test]
    fn cli_parses_repeated_wait_for_pid() {
        let cli = Cli::parse_from(["nf", "-w", "123", "-w", "456", "echo", "done"]);
        assert_eq!(cli.wait_for_pid, vec![123, 456]);
    }

    #[test]
    fn backend_arg_converts_to_backend_kind() {
        assert_eq!(BackendKind::from(BackendArg::Desktop), BackendKind::Desktop);
        assert_eq!(BackendKind::from(BackendArg::Ssh), BackendKind::SshRelay);
        assert_eq!(BackendKind::from(BackendArg::Stdout), BackendKind::Stdout);
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
