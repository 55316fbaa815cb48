//! luahook - run luacheck over Lua sources
//!
//! luahook is a thin wrapper around an external linter. Given a directory it
//! finds every `*.lua` file below it, lints each one separately and prints
//! the output of the files that report errors, or `0 error` when none do.
//! Given a single file it prints the linter's output unchanged.
//!
//! The linter is an opaque collaborator. A file passes when its output
//! contains [`PASS_MARKER`]; nothing else about the output is interpreted.
//!
//! # Library use
//!
//! ```rust,no_run
//! use luahook::{Checker, Linter};
//! use luahook_runner::NativeRunner;
//! use std::path::Path;
//!
//! let linter = Linter::locate(Some(Path::new("luacheck")))?;
//! let checker = Checker::new(NativeRunner::new(), linter)?;
//! let report = checker.check_directory(Path::new("scripts"), &mut std::io::stdout())?;
//! assert!(report.passed());
//! # Ok::<(), luahook::LuahookError>(())
//! ```

pub mod check;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod exit_codes;
pub mod linter;
pub mod logging;
pub mod target;

pub use check::{Checker, DirectoryReport};
pub use error::{InputError, LuahookError};
pub use exit_codes::ExitCode;
pub use linter::{Linter, LinterSource, PASS_MARKER};
pub use target::CheckTarget;
