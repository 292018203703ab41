//! SSH relay adapter
//!
//! Re-invokes nf on the SSH client host so the notification is delivered on
//! the user's local machine instead of the remote one. The relayed
//! invocation wraps a no-op command and carries the rendered title, body,
//! and exit code through the custom-notification flags.

use std::env;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::report::Report;

/// SSH relay notifier
pub struct SshRelayNotifier;

impl SshRelayNotifier {
    pub fn new() -> Self {
        Self
    }

    /// The client IP from `SSH_CLIENT`/`SSH_CONNECTION`
    fn client_host() -> Option<String> {
        let raw = env::var("SSH_CLIENT")
            .or_else(|_| env::var("SSH_CONNECTION"))
            .ok()?;
        client_host_in(&raw)
    }
}

impl Default for SshRelayNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the client IP from an `SSH_CLIENT`-shaped value
/// ("ip client-port server-port"). Only the first field is usable: the
/// ports name the session's source and server ports, not a port the
/// client's own sshd listens on, so the return connection goes to the
/// default port.
fn client_host_in(raw: &str) -> Option<String> {
    let host = raw.split_whitespace().next()?;
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}

/// Single-quote a string for the remote shell command line
fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

#[async_trait]
impl Notifier for SshRelayNotifier {
    async fn notify(&self, report: &Report) -> Result<(), NotificationError> {
        let host = Self::client_host().ok_or_else(|| {
            NotificationError::SendFailed("no SSH_CLIENT/SSH_CONNECTION in environment".to_string())
        })?;

        // ssh concatenates the remote command into one shell string, so the
        // title and body have to be quoted here.
        let remote_command = format!(
            "nf --custom-notification-title {} --custom-notification-text {} --custom-notification-exit-code {} true",
            shell_quote(&report.title),
            shell_quote(&report.body),
            report.exit_code
        );

        let status = Command::new("ssh")
            .args([
                &host,
                "-o",
                "ConnectTimeout=4",
                "-o",
                "BatchMode=yes",
                "--",
                &remote_command,
            ])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NotificationError::ToolNotFound("ssh".to_string())
                } else {
                    NotificationError::SendFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(NotificationError::SendFailed(format!(
                "ssh exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}
