//! Infrastructure layer: adapter implementations

pub mod config;
pub mod history;
pub mod notification;
pub mod process;
pub mod session;

pub use config::XdgConfigStore;
pub use history::HistoryLog;
pub use notification::{create_notifier, select_backend, BackendKind, StdoutNotifier};
pub use process::ShellRunner;
