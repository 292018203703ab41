//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::report::Report;

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("{0} not found")]
    ToolNotFound(String),

    #[error("Failed to send notification: {0}")]
    SendFailed(String),
}

/// Port for delivering a finished-command notification.
///
/// Implementations are best-effort: a send failure is reported through the
/// error but must never panic or have side effects beyond the attempt.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver the report through this backend's mechanism.
    async fn notify(&self, report: &Report) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn notify(&self, report: &Report) -> Result<(), NotificationError> {
        self.as_ref().notify(report).await
    }
}
