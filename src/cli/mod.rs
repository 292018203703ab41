//! CLI layer: argument parsing, orchestration, output, and signals

pub mod app;
pub mod args;
pub mod debug;
pub mod presenter;
pub mod signals;
