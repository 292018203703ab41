//! Desktop-bus notification adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux.

use async_trait::async_trait;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::report::Report;

/// Desktop notifier using notify-rust
pub struct DesktopNotifier {
    /// Application name for notifications
    app_name: String,
}

impl DesktopNotifier {
    /// Create a new desktop notifier
    pub fn new() -> Self {
        Self {
            app_name: "nf".to_string(),
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for DesktopNotifier {
    async fn notify(&self, report: &Report) -> Result<(), NotificationError> {
        let app_name = self.app_name.clone();
        let title = report.title.clone();
        let body = report.body.clone();
        let icon_name = report.icon().icon_name().to_string();

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            notify_rust::Notification::new()
                .appname(&app_name)
                .summary(&title)
                .body(&body)
                .icon(&icon_name)
                .timeout(notify_rust::Timeout::Never)
                .show()
                .map_err(|e| NotificationError::SendFailed(e.to_string()))?;

            Ok(())
        })
        .await
        .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifier_creates_successfully() {
        let notifier = DesktopNotifier::new();
        assert_eq!(notifier.app_name, "nf");
    }

    #[test]
    fn notifier_with_custom_app_name() {
        let notifier = DesktopNotifier::with_app_name("TestApp");
        assert_eq!(notifier.app_name, "TestApp");
    }
}
