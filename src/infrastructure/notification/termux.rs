//! termux-notification adapter (Android)

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::report::Report;

/// termux-notification adapter
pub struct TermuxNotifier;

impl TermuxNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TermuxNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for TermuxNotifier {
    async fn notify(&self, report: &Report) -> Result<(), NotificationError> {
        let status = Command::new("termux-notification")
            .args(["--title", &report.title, "--content", &report.body])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NotificationError::ToolNotFound("termux-notification".to_string())
                } else {
                    NotificationError::SendFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(NotificationError::SendFailed(format!(
                "termux-notification exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}
