//! Application layer: use cases and port interfaces

pub mod ports;
pub mod run;

pub use run::RunCommandUseCase;
