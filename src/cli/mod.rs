//! Command-line interface for luahook
//!
//! - `args`: argument definitions (clap)
//! - `run`: entry point and dispatch

pub mod args;
mod run;

pub use args::Cli;
pub use run::{run, run_from, run_with};
