//! nf - run a command and get a notification when it finishes
//!
//! Wraps an arbitrary shell command, measures wall-clock execution, and
//! delivers a notification with the command's exit status and timing once
//! it terminates.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (invocation, execution result, report) and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (notification backends,
//!   process runner, history log, config store)
//! - **CLI**: Command-line interface, argument parsing, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
