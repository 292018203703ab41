//! Debug trace log
//!
//! An explicit handle passed to the orchestration instead of a global
//! debug flag. Writes `DEBUG:`-prefixed lines to stderr and optionally
//! appends them to a file.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

/// Debug line sink
pub struct DebugLog {
    stderr: bool,
    file: Option<Mutex<File>>,
}

impl DebugLog {
    /// Create a debug log. The file is opened best-effort; a failure to
    /// open it just disables the file sink.
    pub fn new(stderr: bool, path: Option<&Path>) -> Self {
        let file = path.and_then(|p| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(p)
                .ok()
                .map(Mutex::new)
        });

        Self { stderr, file }
    }

    /// Whether any sink is active
    pub fn enabled(&self) -> bool {
        self.stderr || self.file.is_some()
    }

    /// Emit one debug line
    pub fn log(&self, message: &str) {
        if self.stderr {
            eprintln!("DEBUG: {}", message);
        }
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = writeln!(file, "DEBUG: {}", message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_log_is_inert() {
        let log = DebugLog::new(false, None);
        assert!(!log.enabled());
        log.log("nothing happens");
    }

    #[test]
    fn file_sink_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debug.log");
        let log = DebugLog::new(false, Some(&path));
        assert!(log.enabled());

        log.log("first");
        log.log("second");

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "DEBUG: first\nDEBUG: second\n");
    }

    #[test]
    fn unopenable_file_disables_file_sink() {
        let log = DebugLog::new(false, Some(Path::new("/nonexistent/dir/debug.log")));
        assert!(!log.enabled());
        log.log("dropped");
    }
}
