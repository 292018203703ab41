//! Append-only history log
//!
//! One plain-text record per invocation, written to `.nf` in the working
//! directory. Human-readable, not meant for structured re-parsing.

use std::path::PathBuf;

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::domain::error::HistoryError;
use crate::domain::execution::ExecutionResult;
use crate::domain::invocation::Invocation;

/// Timestamp format for history records
const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Default history file name (in the working directory)
const DEFAULT_PATH: &str = ".nf";

/// Append-only history log
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    /// Create a history log at the default path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Format one record
    fn record(invocation: &Invocation, result: &ExecutionResult) -> String {
        format!(
            "{}\nExit code: {}\nStart {}\nStop  {}\nDiff  {}\n----------\n",
            invocation.cmdline(),
            result.exit_code,
            result.start.format(STAMP_FORMAT),
            result.end.format(STAMP_FORMAT),
            result.elapsed_full(),
        )
    }

    /// Append one record for a finished invocation
    pub async fn append(
        &self,
        invocation: &Invocation,
        result: &ExecutionResult,
    ) -> Result<(), HistoryError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| HistoryError(e.to_string()))?;

        file.write_all(Self::record(invocation, result).as_bytes())
            .await
            .map_err(|e| HistoryError(e.to_string()))?;
        file.flush().await.map_err(|e| HistoryError(e.to_string()))?;

        Ok(())
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}
