//! Process execution for the luahook linter wrapper
//!
//! Runs external programs synchronously and captures their output.
//!
//! # Security Model
//!
//! All process execution goes through [`CommandSpec`] to ensure argv-style invocation.
//! File paths discovered on disk are passed as discrete arguments, so spaces, quotes
//! and shell metacharacters in a path never reach a shell.

pub mod command_spec;
pub mod error;
pub mod native;
pub mod process;

pub use command_spec::CommandSpec;
pub use error::RunnerError;
pub use native::NativeRunner;
pub use process::{ProcessOutput, ProcessRunner};
