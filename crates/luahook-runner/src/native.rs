use crate::error::RunnerError;
use std::process::Stdio;

use super::{CommandSpec, ProcessOutput, ProcessRunner};

// ============================================================================
// NativeRunner - blocking native process execution
// ============================================================================

/// Native process runner using `std::process::Command`.
///
/// Runs the command to completion with stdin closed and both output streams
/// piped. There is no timeout: a hung child blocks the caller.
///
/// # Example
///
/// ```rust,no_run
/// use luahook_runner::{CommandSpec, NativeRunner, ProcessRunner};
///
/// let runner = NativeRunner::new();
/// let cmd = CommandSpec::new("luacheck").args(["init.lua", "--no-color"]);
/// let output = runner.run(&cmd).unwrap();
/// println!("{}", output.stdout_string());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeRunner;

impl NativeRunner {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ProcessRunner for NativeRunner {
    fn run(&self, cmd: &CommandSpec) -> Result<ProcessOutput, RunnerError> {
        let mut command = cmd.to_command();
        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        tracing::debug!(command = %cmd.display_lossy(), "Spawning process");

        let child = command.spawn().map_err(|source| RunnerError::SpawnFailed {
            program: cmd.program_display(),
            source,
        })?;

        // Reads both pipes to EOF and reaps the child.
        let output = child
            .wait_with_output()
            .map_err(|source| RunnerError::WaitFailed {
                program: cmd.program_display(),
                source,
            })?;

        tracing::debug!(
            command = %cmd.program_display(),
            exit_code = ?output.status.code(),
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "Process finished"
        );

        Ok(ProcessOutput::new(
            output.stdout,
            output.stderr,
            output.status.code(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_spawn_error() {
        let runner = NativeRunner::new();
        let cmd = CommandSpec::new("luahook-definitely-not-a-real-binary-8f3a");
        let err = runner.run(&cmd).unwrap_err();
        assert!(matches!(err, RunnerError::SpawnFailed { .. }));
        assert_eq!(err.program(), "luahook-definitely-not-a-real-binary-8f3a");
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_stdout_stderr_and_exit_code() {
        let runner = NativeRunner::new();
        let cmd = CommandSpec::new("sh")
            .arg("-c")
            .arg("printf 'out'; printf 'err' >&2; exit 3");
        let output = runner.run(&cmd).unwrap();
        assert_eq!(output.stdout_string(), "out");
        assert_eq!(output.stderr_string(), "err");
        assert_eq!(output.exit_code, Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn test_argument_with_metacharacters_is_not_interpreted() {
        let runner = NativeRunner::new();
        let cmd = CommandSpec::new("printf").args(["%s", "a b;$(whoami)`id`"]);
        let output = runner.run(&cmd).unwrap();
        assert_eq!(output.exit_code, Some(0));
        assert_eq!(output.stdout_string(), "a b;$(whoami)`id`");
    }

    #[cfg(unix)]
    #[test]
    fn test_stdin_is_closed() {
        let runner = NativeRunner::new();
        // `cat` with a null stdin exits immediately with empty output.
        let output = runner.run(&CommandSpec::new("cat")).unwrap();
        assert_eq!(output.exit_code, Some(0));
        assert!(output.stdout.is_empty());
    }
}
