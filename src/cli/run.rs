//! CLI entry point and dispatch logic
//!
//! Owns all output. `main` only maps the returned [`ExitCode`] to the process
//! exit status.

use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::io::{self, Write};

use luahook_runner::NativeRunner;

use super::args::Cli;
use crate::check::Checker;
use crate::error::{InputError, LuahookError};
use crate::exit_codes::ExitCode;
use crate::linter::LinterSource;
use crate::logging;
use crate::target::{self, CheckTarget};

/// Parse the process arguments and run.
pub fn run() -> Result<(), ExitCode> {
    run_from(std::env::args_os())
}

/// Parse `args` (program name first) and run.
///
/// Unknown options and arity problems get the same one-line stdout message
/// as a wrong path count. `--help` and `--version` are printed by clap.
pub fn run_from<I, T>(args: I) -> Result<(), ExitCode>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    match Cli::try_parse_from(&args) {
        Ok(cli) => run_with(cli),
        Err(err) => usage_error(err, args.len().saturating_sub(1)),
    }
}

fn usage_error(err: clap::Error, given: usize) -> Result<(), ExitCode> {
    match err.kind() {
        ErrorKind::UnknownArgument
        | ErrorKind::TooManyValues
        | ErrorKind::WrongNumberOfValues
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::InvalidValue => {
            let input = InputError::ArgumentCount { given };
            println!("{input}");
            Err(input.to_exit_code())
        }
        _ => err.exit(),
    }
}

/// Run with already-parsed arguments.
///
/// Input problems are reported on stdout as one line; failures to carry out
/// the check are reported on stderr.
pub fn run_with(cli: Cli) -> Result<(), ExitCode> {
    if let Err(e) = logging::init_tracing(cli.verbose) {
        eprintln!("warning: failed to initialise logging: {e}");
    }

    let target = match target::single_path(&cli.paths).and_then(target::classify) {
        Ok(target) => target,
        Err(err) => {
            println!("{err}");
            return Err(err.to_exit_code());
        }
    };

    let checker = Checker::new(NativeRunner::new(), LinterSource::Locate(cli.linter))
        .map_err(report)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match target {
        CheckTarget::Directory(dir) => {
            let summary = checker.check_directory(&dir, &mut out).map_err(report)?;
            if summary.passed() {
                Ok(())
            } else {
                Err(ExitCode::LINT_FAILED)
            }
        }
        CheckTarget::File(file) => checker.check_file(&file, &mut out).map_err(report),
    }
}

/// Print a check failure with its suggestions and return its exit code.
fn report(err: LuahookError) -> ExitCode {
    let code = err.to_exit_code();
    let suggestions = err.suggestions();
    let err = anyhow::Error::new(err).context("luahook could not complete the check");

    let stderr = io::stderr();
    let mut stderr = stderr.lock();
    let _ = writeln!(stderr, "✗ {err:#}");
    for suggestion in suggestions {
        let _ = writeln!(stderr, "  • {suggestion}");
    }
    code
}
