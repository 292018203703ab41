//! Port interfaces (traits) for infrastructure adapters

mod config;
mod notifier;
mod runner;

pub use config::ConfigStore;
pub use notifier::{NotificationError, Notifier};
pub use runner::CommandRunner;
