//! Parsed command invocation value object

/// A parsed command invocation. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The program (or shell fragment) to run
    pub program: String,
    /// Remaining arguments, in order
    pub args: Vec<String>,
    /// Optional human-readable job label
    pub label: Option<String>,
}

impl Invocation {
    /// Create a new invocation
    pub fn new(program: impl Into<String>, args: Vec<String>, label: Option<String>) -> Self {
        Self {
            program: program.into(),
            args,
            label,
        }
    }

    /// The full command line as handed to the shell.
    ///
    /// Arguments are joined with spaces so that shell syntax inside the
    /// program string (pipes, redirection) keeps working, matching
    /// `sh -c` semantics.
    pub fn cmdline(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}
