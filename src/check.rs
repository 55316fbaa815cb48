//! Directory and single-file checks
//!
//! Both operations write their report to a caller-supplied writer. The CLI
//! hands in locked stdout; tests hand in a `Vec<u8>`.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use luahook_runner::ProcessRunner;

use crate::discovery::SourceFinder;
use crate::error::LuahookError;
use crate::linter::LinterSource;
use crate::logging;

/// Summary line printed when no file in a directory run failed.
pub const ALL_PASSED_LINE: &str = "0 error";

/// Result of a directory run.
///
/// Passing is the starting state; the first failing file clears it for the
/// rest of the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryReport {
    pub checked: usize,
    pub failed: Vec<PathBuf>,
}

impl DirectoryReport {
    /// True when no file failed, including when nothing was checked.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs the linter over files and writes the report.
#[derive(Debug)]
pub struct Checker<R> {
    runner: R,
    linter: LinterSource,
    finder: SourceFinder,
}

impl<R: ProcessRunner> Checker<R> {
    /// Accepts either a [`Linter`](crate::linter::Linter) or a
    /// [`LinterSource::Locate`] that is resolved on first use.
    pub fn new(runner: R, linter: impl Into<LinterSource>) -> Result<Self, LuahookError> {
        Ok(Self {
            runner,
            linter: linter.into(),
            finder: SourceFinder::lua()?,
        })
    }

    /// Lint every Lua file under `dir`, one at a time.
    ///
    /// A failing file's full output is written as soon as it is seen. If no
    /// file failed, a single `0 error` line is written instead. The linter is
    /// located only when at least one file was found.
    pub fn check_directory<W: Write>(
        &self,
        dir: &Path,
        out: &mut W,
    ) -> Result<DirectoryReport, LuahookError> {
        let started = Instant::now();
        let files = self.finder.find(dir)?;
        tracing::debug!(root = %dir.display(), files = files.len(), "Discovered Lua files");

        let mut report = DirectoryReport::default();
        if !files.is_empty() {
            let linter = self.linter.resolve()?;
            tracing::debug!(linter = %linter.program().display(), "Linting directory");

            for file in files {
                let outcome = linter.lint(&self.runner, &file)?;
                report.checked += 1;

                if !outcome.passed() {
                    out.write_all(&outcome.stdout)?;
                    if !outcome.stdout.ends_with(b"\n") {
                        out.write_all(b"\n")?;
                    }
                    report.failed.push(outcome.file);
                }
            }
        }

        if report.passed() {
            writeln!(out, "{ALL_PASSED_LINE}")?;
        }
        out.flush()?;

        logging::log_directory_summary(
            dir,
            report.checked,
            report.failed.len(),
            started.elapsed().as_millis(),
        );
        Ok(report)
    }

    /// Lint one file and write the linter's stdout byte for byte.
    pub fn check_file<W: Write>(&self, file: &Path, out: &mut W) -> Result<(), LuahookError> {
        let outcome = self.linter.resolve()?.lint(&self.runner, file)?;
        out.write_all(&outcome.stdout)?;
        out.flush()?;
        Ok(())
    }
}
