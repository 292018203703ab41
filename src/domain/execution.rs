//! Execution result value object and time formatting

use chrono::{DateTime, Local};

/// Clock presentation format used in notification bodies (e.g. `17:32.50`)
const CLOCK_FORMAT: &str = "%H:%M.%S";

/// Outcome of running the wrapped command. Read-only once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Wall-clock time just before the child was spawned
    pub start: DateTime<Local>,
    /// Wall-clock time just after the child terminated
    pub end: DateTime<Local>,
    /// The child's exit code (on unix, 128 + signal for signal deaths)
    pub exit_code: i32,
}

impl ExecutionResult {
    /// Whether the wrapped command reported failure
    pub fn failed(&self) -> bool {
        self.exit_code != 0
    }

    /// Start time in clock presentation format
    pub fn start_clock(&self) -> String {
        self.start.format(CLOCK_FORMAT).to_string()
    }

    /// End time in clock presentation format
    pub fn end_clock(&self) -> String {
        self.end.format(CLOCK_FORMAT).to_string()
    }

    /// Elapsed time rendered in the same clock format, as midnight plus
    /// the delta (a two-second run shows as `00:00.02`)
    pub fn elapsed_clock(&self) -> String {
        let secs = self
            .end
            .signed_duration_since(self.start)
            .num_seconds()
            .max(0);
        format!(
            "{:02}:{:02}.{:02}",
            secs / 3600,
            (secs % 3600) / 60,
            secs % 60
        )
    }

    /// Elapsed time rendered for the history log (e.g. `0:00:02.003451`)
    pub fn elapsed_full(&self) -> String {
        let delta = self.end.signed_duration_since(self.start);
        let micros = delta.num_microseconds().unwrap_or(0).max(0);
        let secs = micros / 1_000_000;
        format!(
            "{}:{:02}:{:02}.{:06}",
            secs / 3600,
            (secs % 3600) / 60,
            secs % 60,
            micros % 1_000_000
        )
    }
}
