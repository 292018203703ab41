//! CLI presenter for stderr status output

use colored::*;

/// Presenter for CLI status formatting. All status lines go to stderr so
/// that stdout stays reserved for the notification block.
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} nf: WARNING: {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
