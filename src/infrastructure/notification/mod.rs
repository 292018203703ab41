//! Notification backends and backend selection
//!
//! Each backend is paired with a best-effort availability probe. Selection
//! scans a fixed priority order and short-circuits on the first probe that
//! succeeds; the stdout backend always probes available, so the scan always
//! terminates with a usable backend.

mod desktop;
mod notify_send;
mod ssh_relay;
mod stdout;
mod termux;

pub use desktop::DesktopNotifier;
pub use notify_send::NotifySendNotifier;
pub use ssh_relay::SshRelayNotifier;
pub use stdout::StdoutNotifier;
pub use termux::TermuxNotifier;

use std::env;
use std::fmt;
use std::process::Stdio;
use std::str::FromStr;

use tokio::process::Command;

use crate::application::ports::Notifier;

/// Notification delivery mechanisms, in no particular order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Desktop bus notification via notify-rust (also covers macOS and
    /// Windows toast delivery)
    Desktop,
    /// External notify-send tool
    NotifySend,
    /// termux-notification tool (Android)
    Termux,
    /// Re-invoke nf on the SSH client host
    SshRelay,
    /// Formatted block written to standard output
    Stdout,
}

/// Probe priority when no explicit backend was requested.
const PRIORITY: &[BackendKind] = &[
    BackendKind::SshRelay,
    BackendKind::Desktop,
    BackendKind::NotifySend,
    BackendKind::Termux,
    BackendKind::Stdout,
];

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Desktop => write!(f, "desktop"),
            BackendKind::NotifySend => write!(f, "notify-send"),
            BackendKind::Termux => write!(f, "termux"),
            BackendKind::SshRelay => write!(f, "ssh"),
            BackendKind::Stdout => write!(f, "stdout"),
        }
    }
}

/// Error type for parsing a backend name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBackendError {
    pub value: String,
}

impl fmt::Display for ParseBackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid backend '{}'. Valid options: desktop, notify-send, termux, ssh, stdout",
            self.value
        )
    }
}

impl std::error::Error for ParseBackendError {}

impl FromStr for BackendKind {
    type Err = ParseBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "desktop" | "dbus" => Ok(BackendKind::Desktop),
            "notify-send" => Ok(BackendKind::NotifySend),
            "termux" | "termux-notification" => Ok(BackendKind::Termux),
            "ssh" => Ok(BackendKind::SshRelay),
            "stdout" => Ok(BackendKind::Stdout),
            _ => Err(ParseBackendError {
                value: s.to_string(),
            }),
        }
    }
}

/// Check if a tool binary is available on PATH
async fn is_tool_available(tool: &str) -> bool {
    #[cfg(windows)]
    let finder = "where";
    #[cfg(not(windows))]
    let finder = "which";

    Command::new(finder)
        .arg(tool)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Whether the current process was started from an SSH session
fn in_ssh_session() -> bool {
    env::var_os("SSH_CLIENT").is_some() || env::var_os("SSH_CONNECTION").is_some()
}

/// Best-effort availability probe. Never errors; any failure means
/// "unavailable", and a failed probe excludes the backend for this
/// invocation.
pub async fn probe(kind: BackendKind) -> bool {
    match kind {
        BackendKind::Desktop => {
            #[cfg(target_os = "linux")]
            {
                env::var_os("DBUS_SESSION_BUS_ADDRESS").is_some()
                    || env::var_os("DISPLAY").is_some()
                    || env::var_os("WAYLAND_DISPLAY").is_some()
            }
            #[cfg(not(target_os = "linux"))]
            {
                true
            }
        }
        BackendKind::NotifySend => is_tool_available("notify-send").await,
        BackendKind::Termux => is_tool_available("termux-notification").await,
        BackendKind::SshRelay => in_ssh_session() && is_tool_available("ssh").await,
        BackendKind::Stdout => true,
    }
}

/// Outcome of backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub kind: BackendKind,
    /// An explicitly requested backend probed unavailable and stdout was
    /// substituted
    pub forced_unavailable: bool,
}

/// Select the backend for this invocation.
///
/// An explicit preference is attempted alone; if its probe fails the
/// selection falls back to stdout (reported via `forced_unavailable`, not
/// fatal). Otherwise the priority order is scanned for the first available
/// backend.
pub async fn select_backend(preference: Option<BackendKind>) -> Selection {
    if let Some(kind) = preference {
        if probe(kind).await {
            return Selection {
                kind,
                forced_unavailable: false,
            };
        }
        return Selection {
            kind: BackendKind::Stdout,
            forced_unavailable: true,
        };
    }

    for &kind in PRIORITY {
        if probe(kind).await {
            return Selection {
                kind,
                forced_unavailable: false,
            };
        }
    }

    Selection {
        kind: BackendKind::Stdout,
        forced_unavailable: false,
    }
}

/// Create the notifier adapter for the chosen backend.
///
/// `bell` controls whether the stdout backend appends a terminal bell.
pub fn create_notifier(kind: BackendKind, bell: bool) -> Box<dyn Notifier> {
    match kind {
        BackendKind::Desktop => Box::new(DesktopNotifier::new()),
        BackendKind::NotifySend => Box::new(NotifySendNotifier::new()),
        BackendKind::Termux => Box::new(TermuxNotifier::new()),
        BackendKind::SshRelay => Box::new(SshRelayNotifier::new()),
        BackendKind::Stdout => Box::new(StdoutNotifier::new(bell)),
    }
}
