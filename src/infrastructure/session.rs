//! Terminal-multiplexer session label sniffing
//!
//! Best-effort enrichment of the notification title with the tmux or GNU
//! screen window title. Any failure yields no label; this never affects
//! the run itself.

use std::env;
use std::process::Stdio;

use tokio::process::Command;

/// tmux format string for "where did this run"
const TMUX_FORMAT: &str = "#{session_name} -> #{window_index} #{window_name} -> #{pane_index}";

/// Run a probe command and return its trimmed stdout, or None on any
/// failure or empty output.
async fn probe_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .await
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let text = String::from_utf8_lossy(&output.stdout)
        .trim()
        .trim_matches('"')
        .to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Detect the current multiplexer window title, if any.
pub async fn detect_session_label() -> Option<String> {
    if env::var_os("TMUX").is_some() {
        if let Some(label) = probe_output("tmux", &["display-message", "-p", TMUX_FORMAT]).await {
            return Some(label);
        }
    }

    if env::var_os("STY").is_some() {
        if let Some(label) = probe_output("screen", &["-q", "-Q", "title"]).await {
            return Some(label);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn probe_of_missing_tool_yields_none() {
        assert!(probe_output("definitely-not-a-real-tool", &[]).await.is_none());
    }

    #[tokio::test]
    async fn probe_trims_and_rejects_empty_output() {
        // `true` succeeds with no output
        assert!(probe_output("true", &[]).await.is_none());
    }
}
