//! Process lifecycle adapters

pub mod detach;
pub mod runner;
pub mod shell;
pub mod wait_pid;

pub use detach::{detach, DetachOutcome};
pub use runner::ShellRunner;
pub use wait_pid::wait_for_pids;
