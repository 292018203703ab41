//! Notification report rendering

use crate::domain::execution::ExecutionResult;
use crate::domain::invocation::Invocation;

/// Notification icon severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportIcon {
    Success,
    Error,
}

impl ReportIcon {
    /// Get the freedesktop icon name
    pub const fn icon_name(&self) -> &'static str {
        match self {
            Self::Success => "dialog-information",
            Self::Error => "dialog-error",
        }
    }
}

/// Rendered notification content for a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    pub body: String,
    /// Exit code the wrapper will report
    pub exit_code: i32,
}

impl Report {
    /// Render the report for a finished invocation.
    ///
    /// `cwd` is the directory the command ran in and `session` an optional
    /// terminal-multiplexer window title.
    pub fn render(
        invocation: &Invocation,
        result: &ExecutionResult,
        cwd: &str,
        session: Option<&str>,
    ) -> Self {
        let mut title = invocation.program.clone();
        if let Some(label) = &invocation.label {
            title.push_str(&format!(" ({})", label));
        }
        if let Some(session) = session {
            title.push_str(&format!(" [{}]", session));
        }

        let mut body = format!("\"{}$ {}\"", cwd, invocation.cmdline());
        if result.failed() {
            body.push_str(&format!(" was exit with exit code = {}", result.exit_code));
        } else {
            body.push_str(" finished work.");
        }
        body.push_str(&format!(
            "\n\nStart time:   {}\nEnd time:     {}\nElapsed time: {}",
            result.start_clock(),
            result.end_clock(),
            result.elapsed_clock()
        ));

        Self {
            title,
            body,
            exit_code: result.exit_code,
        }
    }

    /// Apply user overrides for title, body, and exit code (used when the
    /// wrapper is re-invoked as a relay target).
    pub fn with_overrides(
        mut self,
        title: Option<String>,
        body: Option<String>,
        exit_code: Option<i32>,
    ) -> Self {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(body) = body {
            self.body = body;
        }
        if let Some(code) = exit_code {
            self.exit_code = code;
        }
        self
    }

    /// Icon severity for this report
    pub fn icon(&self) -> ReportIcon {
        if self.exit_code != 0 {
            ReportIcon::Error
        } else {
            ReportIcon::Success
        }
    }
}
