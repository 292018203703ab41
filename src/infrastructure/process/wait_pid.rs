//! Wait for external processes to exit
//!
//! Polls each PID with a fixed interval until every one has exited.
//! "No such process" and zombie state both count as exited.

use std::time::Duration;

/// Poll interval between liveness rounds
const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Check whether a process is still running.
#[cfg(unix)]
fn pid_alive(pid: u32) -> bool {
    use nix::errno::Errno;
    use nix::sys::signal::kill;
    use nix::unistd::Pid;

    // Signal 0 probes existence without delivering anything
    match kill(Pid::from_raw(pid as i32), None) {
        Ok(()) => !is_zombie(pid),
        // Exists but owned by someone else
        Err(Errno::EPERM) => true,
        Err(_) => false,
    }
}

/// A zombie has exited; only the process-table entry remains.
#[cfg(target_os = "linux")]
fn is_zombie(pid: u32) -> bool {
    let stat = match std::fs::read_to_string(format!("/proc/{}/stat", pid)) {
        Ok(s) => s,
        Err(_) => return true,
    };
    // State is the first field after the parenthesized comm, which may
    // itself contain spaces and parentheses.
    stat.rsplit_once(')')
        .map(|(_, rest)| rest.trim_start().starts_with('Z'))
        .unwrap_or(false)
}

#[cfg(all(unix, not(target_os = "linux")))]
fn is_zombie(_pid: u32) -> bool {
    false
}

/// Check whether a process is still running.
#[cfg(windows)]
fn pid_alive(pid: u32) -> bool {
    use windows_sys::Win32::Foundation::{CloseHandle, WAIT_TIMEOUT};
    use windows_sys::Win32::System::Threading::{
        OpenProcess, WaitForSingleObject, PROCESS_SYNCHRONIZE,
    };

    unsafe {
        let handle = OpenProcess(PROCESS_SYNCHRONIZE, 0, pid);
        if handle.is_null() {
            return false;
        }
        let wait = WaitForSingleObject(handle, 0);
        CloseHandle(handle);
        wait == WAIT_TIMEOUT
    }
}

/// Block until every PID in the set has exited.
pub async fn wait_for_pids(pids: &[u32]) {
    let mut remaining: Vec<u32> = pids.to_vec();
    loop {
        remaining.retain(|&pid| pid_alive(pid));
        if remaining.is_empty() {
            return;
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_set_returns_immediately() {
        wait_for_pids(&[]).await;
    }

    #[tokio::test]
    async fn nonexistent_pid_counts_as_exited() {
        // Far above any realistic pid_max
        wait_for_pids(&[99_999_999]).await;
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn own_pid_is_alive() {
        assert!(pid_alive(std::process::id()));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn waits_for_short_lived_child() {
        use std::time::Instant;

        let mut child = std::process::Command::new("sleep")
            .arg("1")
            .spawn()
            .expect("spawn sleep");
        let pid = child.id();

        let started = Instant::now();
        wait_for_pids(&[pid]).await;
        // The child sleeps for a second; the wait must cover it
        assert!(started.elapsed() >= Duration::from_millis(900));

        let _ = child.wait();
    }
}
