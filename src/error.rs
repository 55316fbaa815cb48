//! Error types for luahook
//!
//! Two families of failure exist:
//! - [`InputError`]: the user's argument is unusable. Reported on stdout as a
//!   single line, the way the check report itself is.
//! - [`LuahookError`]: the check could not be carried out. Reported on stderr.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::exit_codes::ExitCode;
pub use luahook_runner::RunnerError;

/// Problems with the command-line path argument.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("missing or extra argument: expected exactly one path to check")]
    ArgumentCount { given: usize },

    #[error("path does not exist: {}", .path.display())]
    PathNotFound { path: PathBuf },

    #[error("invalid path type: {} is neither a file nor a directory", .path.display())]
    InvalidPathType { path: PathBuf },
}

impl InputError {
    #[must_use]
    pub const fn to_exit_code(&self) -> ExitCode {
        ExitCode::CLI_ARGS
    }
}

/// Failures that stop a check run.
///
/// Lint findings are not errors: a file without the passing summary is
/// reported through [`DirectoryReport`](crate::check::DirectoryReport).
#[derive(Error, Debug)]
pub enum LuahookError {
    #[error("Linter not found at {}: {reason}", .path.display())]
    LinterNotFound { path: PathBuf, reason: String },

    #[error("Linter invocation failed for {}: {source}", .file.display())]
    Linter {
        file: PathBuf,
        #[source]
        source: RunnerError,
    },

    #[error("Failed to read directory {}: {source}", .path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid file pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl LuahookError {
    /// Map this error to the CLI exit code.
    #[must_use]
    pub fn to_exit_code(&self) -> ExitCode {
        match self {
            Self::LinterNotFound { .. } | Self::Linter { .. } => ExitCode::LINTER_FAILURE,
            Self::Discovery { .. } | Self::InvalidPattern { .. } | Self::Io(_) => {
                ExitCode::INTERNAL
            }
        }
    }

    /// Suggested actions to resolve the error.
    #[must_use]
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::LinterNotFound { .. } => vec![
                "Install luacheck into the 'bin' directory next to the luahook executable"
                    .to_string(),
                "Or point at an existing binary with --linter <PATH>".to_string(),
            ],
            Self::Linter { source, .. } => match source {
                RunnerError::SpawnFailed { .. } => vec![
                    format!("Check that '{}' exists and is executable", source.program()),
                    "Run it by hand with --no-color to see its own error".to_string(),
                ],
                RunnerError::Terminated { .. } => {
                    vec!["The linter was killed by a signal; check system resources".to_string()]
                }
                RunnerError::WaitFailed { .. } => Vec::new(),
            },
            Self::Discovery { .. } => {
                vec!["Check the directory permissions and try again".to_string()]
            }
            Self::InvalidPattern { .. } | Self::Io(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_messages() {
        assert_eq!(
            InputError::ArgumentCount { given: 2 }.to_string(),
            "missing or extra argument: expected exactly one path to check"
        );
        assert_eq!(
            InputError::PathNotFound {
                path: PathBuf::from("nope/x.lua")
            }
            .to_string(),
            "path does not exist: nope/x.lua"
        );
        assert_eq!(
            InputError::InvalidPathType {
                path: PathBuf::from("/dev/null")
            }
            .to_string(),
            "invalid path type: /dev/null is neither a file nor a directory"
        );
    }

    #[test]
    fn test_input_errors_map_to_cli_args() {
        let err = InputError::ArgumentCount { given: 0 };
        assert_eq!(err.to_exit_code(), ExitCode::CLI_ARGS);
    }

    #[test]
    fn test_linter_errors_map_to_linter_failure() {
        let not_found = LuahookError::LinterNotFound {
            path: PathBuf::from("bin/luacheck"),
            reason: "no such file".to_string(),
        };
        assert_eq!(not_found.to_exit_code(), ExitCode::LINTER_FAILURE);
        assert!(!not_found.suggestions().is_empty());

        let terminated = LuahookError::Linter {
            file: PathBuf::from("a.lua"),
            source: RunnerError::Terminated {
                program: "luacheck".to_string(),
            },
        };
        assert_eq!(terminated.to_exit_code(), ExitCode::LINTER_FAILURE);
        assert!(terminated.to_string().contains("a.lua"));
    }

    #[test]
    fn test_spawn_failure_suggestion_names_the_linter() {
        let err = LuahookError::Linter {
            file: PathBuf::from("a.lua"),
            source: RunnerError::SpawnFailed {
                program: "/opt/luahook/bin/luacheck".to_string(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            },
        };
        let suggestions = err.suggestions();
        assert_eq!(
            suggestions[0],
            "Check that '/opt/luahook/bin/luacheck' exists and is executable"
        );
    }

    #[test]
    fn test_io_errors_map_to_internal() {
        let err = LuahookError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.to_exit_code(), ExitCode::INTERNAL);
        let err = LuahookError::Discovery {
            path: PathBuf::from("src"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_exit_code(), ExitCode::INTERNAL);
    }
}
