//! Domain layer: value objects and errors

pub mod config;
pub mod error;
pub mod execution;
pub mod invocation;
pub mod report;
