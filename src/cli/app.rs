//! Main app runner

use std::process::ExitCode;

use crate::application::ports::{ConfigStore, Notifier};
use crate::application::RunCommandUseCase;
use crate::domain::config::AppConfig;
use crate::domain::invocation::Invocation;
use crate::domain::report::Report;
use crate::infrastructure::process::wait_for_pids;
use crate::infrastructure::{
    create_notifier, select_backend, session, BackendKind, HistoryLog, ShellRunner, StdoutNotifier,
    XdgConfigStore,
};

use super::args::Cli;
use super::debug::DebugLog;
use super::presenter::Presenter;
use super::signals::InterruptGuard;

/// Exit codes
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run a full invocation: wait, execute, render, notify, log.
pub async fn run(cli: Cli) -> ExitCode {
    let presenter = Presenter::new();
    let debug = DebugLog::new(cli.debug, cli.debug_file.as_deref());

    // Merge file config with CLI flags (CLI wins)
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            presenter.warn(&format!("{}", e));
            AppConfig::empty()
        }
    };
    let cli_config = AppConfig {
        backend: cli.backend.map(|b| BackendKind::from(b).to_string()),
        print: cli.print.then_some(true),
        save: cli.save.then_some(true),
        notify: cli.no_notify.then_some(false),
    };
    let config = file_config.merge(cli_config);

    // Shield the wrapper from the first Ctrl+C
    let guard = match InterruptGuard::install() {
        Ok(guard) => Some(guard),
        Err(e) => {
            presenter.warn(&format!("Could not install signal handler: {}", e));
            None
        }
    };

    // Wait for external processes before starting
    if !cli.wait_for_pid.is_empty() {
        debug.log(&format!("waiting for pids: {:?}", cli.wait_for_pid));
        wait_for_pids(&cli.wait_for_pid).await;
        debug.log("all waited pids exited");
    }

    let invocation = Invocation::new(cli.cmd, cli.args, cli.label);

    let session = session::detect_session_label().await;
    if let Some(session) = &session {
        debug.log(&format!("multiplexer session: {}", session));
    }

    let use_case = RunCommandUseCase::new(ShellRunner::new());
    let (result, report) = match use_case.execute(&invocation, session.as_deref()).await {
        Ok(outcome) => outcome,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };
    debug.log(&format!("command finished with exit code {}", result.exit_code));
    if let Some(guard) = &guard {
        if guard.was_interrupted() {
            debug.log("run was interrupted once; reporting anyway");
        }
    }

    let report = report.with_overrides(
        cli.custom_notification_title,
        cli.custom_notification_text,
        cli.custom_notification_exit_code,
    );

    if config.save_or_default() {
        if let Err(e) = HistoryLog::new().append(&invocation, &result).await {
            presenter.warn(&format!("{}", e));
        }
    }

    let notify = config.notify_or_default();
    let printed = if notify {
        dispatch(&report, &config, &presenter, &debug).await
    } else {
        false
    };

    // Print the block when asked to, or when there was no real delivery
    if (config.print_or_default() || !notify) && !printed {
        StdoutNotifier::new(notify).print(&report);
    }

    exit_code(report.exit_code)
}

/// Select a backend and deliver the report through it. Any failure is
/// downgraded to the stdout presentation for this run only. Returns
/// whether the stdout block ended up printed.
async fn dispatch(
    report: &Report,
    config: &AppConfig,
    presenter: &Presenter,
    debug: &DebugLog,
) -> bool {
    let preference = config.backend.as_deref().and_then(|name| {
        match name.parse::<BackendKind>() {
            Ok(kind) => Some(kind),
            Err(e) => {
                presenter.warn(&e.to_string());
                None
            }
        }
    });

    let selection = select_backend(preference).await;
    if selection.forced_unavailable {
        presenter.warn(&format!(
            "backend '{}' is not available, notification will go to stdout",
            preference.map(|k| k.to_string()).unwrap_or_default()
        ));
    }
    debug.log(&format!("selected backend: {}", selection.kind));

    let notifier = create_notifier(selection.kind, true);
    match notifier.notify(report).await {
        Ok(()) => selection.kind == BackendKind::Stdout,
        Err(e) => {
            presenter.warn(&format!(
                "backend '{}' failed ({}), falling back to stdout",
                selection.kind, e
            ));
            StdoutNotifier::new(true).print(report);
            true
        }
    }
}

/// Map the wrapped command's exit code onto the wrapper's own
fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(exit_byte(code))
}

/// The process exit byte for a (possibly out-of-range) exit code
fn exit_byte(code: i32) -> u8 {
    (code & 0xff) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_byte_passthrough() {
        assert_eq!(exit_byte(0), 0);
        assert_eq!(exit_byte(7), 7);
        assert_eq!(exit_byte(130), 130);
    }

    #[test]
    fn exit_byte_wraps_out_of_range_codes() {
        assert_eq!(exit_byte(256), 0);
        assert_eq!(exit_byte(257), 1);
        assert_eq!(exit_byte(-1), 255);
    }
}
