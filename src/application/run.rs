//! Run-and-report use case

use crate::application::ports::CommandRunner;
use crate::domain::error::RunError;
use crate::domain::execution::ExecutionResult;
use crate::domain::invocation::Invocation;
use crate::domain::report::Report;

/// Use case: execute the wrapped command and render its report.
pub struct RunCommandUseCase<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> RunCommandUseCase<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Run the invocation to completion and render the notification report.
    ///
    /// `session` is an optional terminal-multiplexer window title used to
    /// enrich the notification title.
    pub async fn execute(
        &self,
        invocation: &Invocation,
        session: Option<&str>,
    ) -> Result<(ExecutionResult, Report), RunError> {
        let cwd = std::env::current_dir()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();

        let result = self.runner.run(invocation).await?;
        let report = Report::render(invocation, &result, &cwd, session);

        Ok((result, report))
    }
}
