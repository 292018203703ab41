//! Command runner port interface

use async_trait::async_trait;

use crate::domain::error::RunError;
use crate::domain::execution::ExecutionResult;
use crate::domain::invocation::Invocation;

/// Port for executing the wrapped command.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run the invocation to completion, blocking until the child exits.
    ///
    /// # Returns
    /// The execution result with start/end timestamps and the exit code.
    async fn run(&self, invocation: &Invocation) -> Result<ExecutionResult, RunError>;
}
