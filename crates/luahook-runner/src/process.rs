use crate::error::RunnerError;

use super::CommandSpec;

// ============================================================================
// ProcessRunner Trait - process execution seam
// ============================================================================

/// Captured result of one process execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Standard output from the process
    pub stdout: Vec<u8>,
    /// Standard error from the process
    pub stderr: Vec<u8>,
    /// Exit code from the process (None if terminated by signal)
    pub exit_code: Option<i32>,
}

impl ProcessOutput {
    #[must_use]
    pub fn new(stdout: Vec<u8>, stderr: Vec<u8>, exit_code: Option<i32>) -> Self {
        Self {
            stdout,
            stderr,
            exit_code,
        }
    }

    /// Get stdout as a UTF-8 string, lossy conversion.
    #[must_use]
    pub fn stdout_string(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    /// Get stderr as a UTF-8 string, lossy conversion.
    #[must_use]
    pub fn stderr_string(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// Trait for process execution.
///
/// Implementations MUST use argv-style APIs only (no shell string evaluation)
/// and MUST block until the process has exited and its pipes are drained.
///
/// The check runner is generic over this trait so tests can script linter
/// responses without spawning anything.
///
/// # Example
///
/// ```rust
/// use luahook_runner::{CommandSpec, ProcessOutput, ProcessRunner, RunnerError};
///
/// struct Canned;
///
/// impl ProcessRunner for Canned {
///     fn run(&self, _cmd: &CommandSpec) -> Result<ProcessOutput, RunnerError> {
///         Ok(ProcessOutput::new(b"0 errors in 1 file".to_vec(), Vec::new(), Some(0)))
///     }
/// }
///
/// let out = Canned.run(&CommandSpec::new("luacheck")).unwrap();
/// assert_eq!(out.exit_code, Some(0));
/// ```
pub trait ProcessRunner {
    /// Execute a command and wait for it to finish.
    ///
    /// * `Ok(ProcessOutput)` - the process ran (possibly with a non-zero exit code)
    /// * `Err(RunnerError)` - it could not be spawned or its output could not be collected
    fn run(&self, cmd: &CommandSpec) -> Result<ProcessOutput, RunnerError>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
    fn run(&self, cmd: &CommandSpec) -> Result<ProcessOutput, RunnerError> {
        (**self).run(cmd)
    }
}
