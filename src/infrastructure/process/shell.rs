//! Parent shell detection
//!
//! The wrapped command runs under the user's shell so that shell syntax in
//! the command line (pipes, globs, redirection) behaves the way it does
//! when typed interactively.

use std::env;
use std::path::Path;

/// Shells we trust to take `-c <cmdline>`
const KNOWN_SHELLS: &[&str] = &["bash", "zsh", "fish", "dash", "ksh", "tcsh", "csh", "sh"];

/// The shell program and its command-string flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    pub program: String,
    pub flag: &'static str,
}

/// Detect the shell to wrap the command line in.
///
/// Uses `$SHELL` when it names a known shell, otherwise falls back to
/// `sh -c` (or `cmd /C` on Windows).
pub fn detect_shell() -> Shell {
    #[cfg(windows)]
    {
        Shell {
            program: env::var("COMSPEC").unwrap_or_else(|_| "cmd".to_string()),
            flag: "/C",
        }
    }

    #[cfg(not(windows))]
    {
        let program = env::var("SHELL")
            .ok()
            .filter(|s| {
                Path::new(s)
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|name| KNOWN_SHELLS.contains(&name))
            })
            .unwrap_or_else(|| "sh".to_string());

        Shell { program, flag: "-c" }
    }
}

#[cfg(all(test, not(windows)))]
mod tests {
    use super::*;

    #[test]
    fn detected_shell_takes_dash_c() {
        let shell = detect_shell();
        assert_eq!(shell.flag, "-c");
        assert!(!shell.program.is_empty());
    }

    #[test]
    fn known_shells_include_sh() {
        assert!(KNOWN_SHELLS.contains(&"sh"));
        assert!(KNOWN_SHELLS.contains(&"bash"));
    }
}
