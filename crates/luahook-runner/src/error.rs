//! Error types for runner module

use thiserror::Error;

/// Failures while starting or collecting an external process.
///
/// A process that runs and exits with a non-zero code is NOT an error here;
/// callers inspect [`ProcessOutput`](crate::ProcessOutput) for that.
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Failed to spawn '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to collect output of '{program}': {source}")]
    WaitFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' was terminated without an exit code")]
    Terminated { program: String },
}

impl RunnerError {
    /// Name of the program the failure relates to.
    #[must_use]
    pub fn program(&self) -> &str {
        match self {
            Self::SpawnFailed { program, .. }
            | Self::WaitFailed { program, .. }
            | Self::Terminated { program } => program,
        }
    }
}
