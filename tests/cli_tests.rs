//! CLI integration tests

use std::process::Command;

fn nf_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_nf"));
    // Keep title rendering and config lookup deterministic in CI
    cmd.env_remove("TMUX")
        .env_remove("STY")
        .env("XDG_CONFIG_HOME", "/nonexistent");
    cmd
}

#[test]
fn help_output() {
    let output = nf_bin().arg("--help").output().expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("notification"));
    assert!(stdout.contains("--label"));
    assert!(stdout.contains("--print"));
    assert!(stdout.contains("--no-notify"));
    assert!(stdout.contains("--save"));
    assert!(stdout.contains("--backend"));
    assert!(stdout.contains("--wait-for-pid"));
    assert!(stdout.contains("--detach"));
}

#[test]
fn version_output() {
    let output = nf_bin().arg("--version").output().expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("nf"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_command_is_usage_error() {
    let output = nf_bin().output().expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn exit_code_passthrough_success() {
    let output = nf_bin().args(["-n", "ls"]).output().expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn exit_code_passthrough_failure() {
    let output = nf_bin()
        .args(["-n", "exit 7"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(7));
}

#[test]
fn success_body_mentions_finished_work() {
    let output = nf_bin()
        .args(["-n", "-p", "ls"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("finished work."));
    assert!(stdout.contains("Start time:"));
    assert!(stdout.contains("End time:"));
    assert!(stdout.contains("Elapsed time:"));
}

#[test]
fn failure_body_mentions_exit_code() {
    let output = nf_bin()
        .args(["-n", "-p", "ls", "not_exist_file"])
        .output()
        .expect("Failed to execute command");

    assert_ne!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("was exit with exit code"));
}

#[test]
fn label_appears_in_title() {
    let output = nf_bin()
        .args(["-n", "-p", "-l", "this is label", "ls"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ls (this is label)"));
}

#[test]
fn no_notify_still_prints_block() {
    // Without -p the block is still printed when notifications are off,
    // but without the trailing bell
    let output = nf_bin().args(["-n", "ls"]).output().expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("finished work."));
    assert!(!stdout.contains('\x07'));
}

#[test]
fn print_with_notify_appends_bell() {
    let output = nf_bin()
        .args(["--backend", "stdout", "ls"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains('\x07'));
}

#[test]
fn save_appends_history_records() {
    let dir = tempfile::tempdir().unwrap();

    for _ in 0..2 {
        let output = nf_bin()
            .current_dir(dir.path())
            .args(["-n", "-s", "ls"])
            .output()
            .expect("Failed to execute command");
        assert_eq!(output.status.code(), Some(0));
    }

    let content = std::fs::read_to_string(dir.path().join(".nf")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], "ls");
    assert_eq!(lines[1], "Exit code: 0");
    assert_eq!(&lines[2][..6], "Start ");
    assert_eq!(&lines[3][..6], "Stop  ");
    assert_eq!(&lines[4][..6], "Diff  ");
    assert_eq!(lines[5], "----------");
    assert_eq!(lines[6], "ls");
}

#[cfg(unix)]
#[test]
fn wait_for_pid_blocks_until_exit() {
    use std::time::{Duration, Instant};

    let mut first = Command::new("sleep").arg("1").spawn().expect("spawn sleep");
    let mut second = Command::new("sleep").arg("1").spawn().expect("spawn sleep");

    let started = Instant::now();
    let output = nf_bin()
        .args([
            "-n",
            "-w",
            &first.id().to_string(),
            "-w",
            &second.id().to_string(),
            "true",
        ])
        .output()
        .expect("Failed to execute command");
    let elapsed = started.elapsed();

    assert_eq!(output.status.code(), Some(0));
    assert!(
        elapsed >= Duration::from_millis(900),
        "returned after {:?}, before the waited processes exited",
        elapsed
    );

    let _ = first.wait();
    let _ = second.wait();
}

#[cfg(unix)]
#[test]
fn detach_parent_returns_before_command_finishes() {
    use std::process::Stdio;
    use std::time::{Duration, Instant};

    // The detached child keeps the inherited stdio open, so null it out
    // and time the parent's exit rather than waiting for output EOF
    let started = Instant::now();
    let status = nf_bin()
        .args(["-n", "-d", "sleep", "2"])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to execute command")
        .wait()
        .expect("Failed to wait on command");
    let elapsed = started.elapsed();

    assert_eq!(status.code(), Some(0));
    assert!(
        elapsed < Duration::from_millis(1500),
        "parent returned after {:?}, it did not detach",
        elapsed
    );
}

#[test]
fn debug_file_collects_trace_lines() {
    let dir = tempfile::tempdir().unwrap();
    let debug_path = dir.path().join("debug.log");

    let output = nf_bin()
        .args([
            "-n",
            "--debug-file",
            debug_path.to_str().unwrap(),
            "ls",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let content = std::fs::read_to_string(&debug_path).unwrap();
    assert!(content.contains("DEBUG: command finished with exit code 0"));
}
