//! Plain stdout notification adapter
//!
//! The terminal-of-last-resort backend: prints the report between separator
//! lines, optionally followed by a bell character. Always available.

use async_trait::async_trait;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::report::Report;

/// Separator width when the terminal size cannot be determined
const FALLBACK_COLUMNS: usize = 10;

/// Plain stdout notifier
pub struct StdoutNotifier {
    /// Append a terminal bell after the block
    bell: bool,
}

impl StdoutNotifier {
    pub fn new(bell: bool) -> Self {
        Self { bell }
    }

    /// Render the notification block (without the trailing bell)
    pub fn render_block(report: &Report) -> String {
        let columns = crossterm::terminal::size()
            .map(|(cols, _rows)| cols as usize)
            .unwrap_or(FALLBACK_COLUMNS)
            .max(1);
        let separator = "-".repeat(columns);
        format!(
            "{}\n{}\n{}\n{}",
            separator, report.title, report.body, separator
        )
    }

    /// Print the block to stdout
    pub fn print(&self, report: &Report) {
        println!("{}", Self::render_block(report));
        if self.bell {
            println!("\x07");
        }
    }
}

#[async_trait]
impl Notifier for StdoutNotifier {
    async fn notify(&self, report: &Report) -> Result<(), NotificationError> {
        self.print(report);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> Report {
        Report {
            title: "ls".to_string(),
            body: "\"/tmp$ ls\" finished work.".to_string(),
            exit_code: 0,
        }
    }

    #[test]
    fn block_brackets_title_and_body_with_separators() {
        let block = StdoutNotifier::render_block(&report());
        let lines: Vec<&str> = block.lines().collect();
        assert!(lines[0].chars().all(|c| c == '-'));
        assert_eq!(lines[1], "ls");
        assert_eq!(lines[2], "\"/tmp$ ls\" finished work.");
        assert_eq!(lines.last().unwrap(), &lines[0]);
    }

    #[tokio::test]
    async fn notify_never_fails() {
        let notifier = StdoutNotifier::new(false);
        assert!(notifier.notify(&report()).await.is_ok());
    }
}
