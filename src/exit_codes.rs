//! Exit code constants for luahook.
//!
//! # Exit Code Table
//!
//! | Code | Constant | Description |
//! |------|----------|-------------|
//! | 0 | `SUCCESS` | Every checked file passed, or a single file was linted |
//! | 1 | `INTERNAL` | Traversal or output I/O failure |
//! | 2 | `CLI_ARGS` | Wrong argument count, missing path, or invalid path type |
//! | 3 | `LINT_FAILED` | At least one file in a directory run failed |
//! | 70 | `LINTER_FAILURE` | The linter could not be located, spawned, or was killed |

/// Process exit code.
///
/// Use the named constants, and [`as_i32()`](Self::as_i32) for
/// `std::process::exit()`.
///
/// ```rust
/// use luahook::ExitCode;
///
/// assert_eq!(ExitCode::SUCCESS.as_i32(), 0);
/// assert_eq!(ExitCode::LINTER_FAILURE.as_i32(), 70);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Success - all files passed, or single-file output was printed
    pub const SUCCESS: ExitCode = ExitCode(0);

    /// Internal error - directory traversal or stdout write failed
    pub const INTERNAL: ExitCode = ExitCode(1);

    /// CLI arguments error - not exactly one path, or the path is unusable
    pub const CLI_ARGS: ExitCode = ExitCode(2);

    /// Lint failed - at least one file lacked the passing summary
    pub const LINT_FAILED: ExitCode = ExitCode(3);

    /// Linter failure - the external linter could not be run
    pub const LINTER_FAILURE: ExitCode = ExitCode(70);

    /// Get the numeric exit code value.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}
