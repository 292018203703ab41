//! Detached launching
//!
//! On unix the process forks: the parent returns immediately and the child
//! (in a new session) carries on running the command and notifying. On
//! Windows the process re-spawns itself without the detach flag using the
//! detached-process creation flags.

use std::io;

/// Which side of the detach this process ended up on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetachOutcome {
    /// The original process; should exit immediately with the detached
    /// sentinel code
    Parent,
    /// The detached continuation; should run the command and notify
    Child,
}

/// Remove the detach flag from a raw argument list so the re-spawned
/// process runs attached. Handles `-d`, `--detach`, and `d` inside a
/// combined short cluster like `-ndp`.
pub fn strip_detach_flag<I: IntoIterator<Item = String>>(args: I) -> Vec<String> {
    let mut out = Vec::new();
    for arg in args {
        if arg == "-d" || arg == "--detach" {
            continue;
        }
        if arg.starts_with('-')
            && !arg.starts_with("--")
            && arg.len() > 1
            && arg[1..].chars().all(|c| c.is_ascii_alphabetic())
        {
            let cluster: String = arg[1..].chars().filter(|&c| c != 'd').collect();
            if cluster.is_empty() {
                continue;
            }
            out.push(format!("-{}", cluster));
            continue;
        }
        out.push(arg);
    }
    out
}

/// Detach from the invoking terminal session.
#[cfg(unix)]
pub fn detach() -> io::Result<DetachOutcome> {
    use nix::unistd::{fork, setsid, ForkResult};

    // Safety: called from main before the tokio runtime (and any other
    // threads) exist.
    match unsafe { fork() }.map_err(io::Error::from)? {
        ForkResult::Parent { .. } => Ok(DetachOutcome::Parent),
        ForkResult::Child => {
            let _ = setsid();
            Ok(DetachOutcome::Child)
        }
    }
}

/// Detach from the invoking terminal session.
#[cfg(windows)]
pub fn detach() -> io::Result<DetachOutcome> {
    use std::os::windows::process::CommandExt;
    use windows_sys::Win32::System::Threading::{CREATE_NEW_PROCESS_GROUP, DETACHED_PROCESS};

    let exe = std::env::current_exe()?;
    let args = strip_detach_flag(std::env::args().skip(1));

    std::process::Command::new(exe)
        .args(args)
        .creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP)
        .spawn()?;

    Ok(DetachOutcome::Parent)
}
