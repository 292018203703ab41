//! Shell command runner adapter

use async_trait::async_trait;
use chrono::Local;
use tokio::process::Command;

use crate::application::ports::CommandRunner;
use crate::domain::error::RunError;
use crate::domain::execution::ExecutionResult;
use crate::domain::invocation::Invocation;

use super::shell::detect_shell;

/// Runs the wrapped command under the detected shell, inheriting the
/// terminal, and records wall-clock start/end around the blocking wait.
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Map an exit status to the code the wrapper reports.
/// On unix a signal death reports 128 + signal, matching shell convention.
fn exit_code_of(status: std::process::ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ExecutionResult, RunError> {
        let shell = detect_shell();

        let start = Local::now();
        let status = Command::new(&shell.program)
            .arg(shell.flag)
            .arg(invocation.cmdline())
            .status()
            .await
            .map_err(|e| RunError::SpawnFailed(e.to_string()))?;
        let end = Local::now();

        Ok(ExecutionResult {
            start,
            end,
            exit_code: exit_code_of(status),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn runs_true_with_exit_zero() {
        let runner = ShellRunner::new();
        let inv = Invocation::new("true", vec![], None);
        let result = runner.run(&inv).await.unwrap();
        assert_eq!(result.exit_code, 0);
        assert!(result.end >= result.start);
    }

    #[tokio::test]
    async fn propagates_nonzero_exit_code() {
        let runner = ShellRunner::new();
        let inv = Invocation::new("exit 7", vec![], None);
        let result = runner.run(&inv).await.unwrap();
        assert_eq!(result.exit_code, 7);
    }

    #[tokio::test]
    async fn shell_syntax_works_through_cmdline() {
        let runner = ShellRunner::new();
        let inv = Invocation::new("true && exit 3", vec![], None);
        let result = runner.run(&inv).await.unwrap();
        assert_eq!(result.exit_code, 3);
    }
}
