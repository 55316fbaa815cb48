//! External linter adapter
//!
//! luahook never inspects Lua itself. It runs luacheck once per file as
//! `<linter> <file> --no-color` and reads the summary line from stdout.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use luahook_runner::{CommandSpec, ProcessRunner, RunnerError};

use crate::error::LuahookError;
use crate::logging;

/// Substring luacheck prints for a file with no errors.
///
/// Warnings still pass: `Total: 2 warnings / 0 errors in 1 file` contains it.
pub const PASS_MARKER: &str = "0 errors in 1 file";

/// Flag that keeps ANSI escapes out of the captured output.
pub const NO_COLOR_FLAG: &str = "--no-color";

/// Directory, next to the luahook executable, holding the bundled linter.
pub const BUNDLED_BIN_DIR: &str = "bin";

/// Name of the bundled linter binary.
pub const LINTER_NAME: &str = "luacheck";

/// Whether captured linter stdout reports a clean file.
#[must_use]
pub fn output_passes(stdout: &str) -> bool {
    stdout.contains(PASS_MARKER)
}

/// Outcome of linting a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintOutcome {
    pub file: PathBuf,
    /// Linter stdout exactly as captured
    pub stdout: Vec<u8>,
    /// Linter stdout, decoded as UTF-8 (lossy), for marker matching
    pub output: String,
    pub exit_code: i32,
}

impl LintOutcome {
    #[must_use]
    pub fn passed(&self) -> bool {
        output_passes(&self.output)
    }
}

/// A located linter executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Linter {
    program: PathBuf,
}

impl Linter {
    /// Use `program` as-is, without checking that it exists.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Locate the linter.
    ///
    /// With an override, a value containing a path separator is taken
    /// literally and a bare name is looked up on `PATH`. Without one, the
    /// bundled `bin/luacheck` next to the running executable is used.
    pub fn locate(override_path: Option<&Path>) -> Result<Self, LuahookError> {
        let program = match override_path {
            Some(path) if is_bare_name(path) => {
                which::which(path).map_err(|e| LuahookError::LinterNotFound {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?
            }
            Some(path) => path.to_path_buf(),
            None => bundled_linter_path()?,
        };

        if !program.is_file() {
            return Err(LuahookError::LinterNotFound {
                path: program,
                reason: "no such file".to_string(),
            });
        }

        tracing::debug!(linter = %program.display(), "Using linter");
        Ok(Self { program })
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Argv for linting `file`.
    #[must_use]
    pub fn command_for(&self, file: &Path) -> CommandSpec {
        CommandSpec::new(self.program.as_os_str())
            .arg(file.as_os_str())
            .arg(NO_COLOR_FLAG)
    }

    /// Run the linter on `file` and collect its stdout.
    ///
    /// Lint findings are not an error. Failing to start the linter, or the
    /// linter dying without an exit code, is.
    pub fn lint<R: ProcessRunner>(
        &self,
        runner: &R,
        file: &Path,
    ) -> Result<LintOutcome, LuahookError> {
        let _span = logging::lint_span(file).entered();
        let cmd = self.command_for(file);

        let output = runner.run(&cmd).map_err(|source| LuahookError::Linter {
            file: file.to_path_buf(),
            source,
        })?;

        logging::log_linter_stderr(file, &output.stderr_string());

        let exit_code = output.exit_code.ok_or_else(|| LuahookError::Linter {
            file: file.to_path_buf(),
            source: RunnerError::Terminated {
                program: cmd.program_display(),
            },
        })?;

        let outcome = LintOutcome {
            file: file.to_path_buf(),
            output: output.stdout_string(),
            stdout: output.stdout,
            exit_code,
        };
        tracing::debug!(exit_code, passed = outcome.passed(), "Linted file");
        Ok(outcome)
    }
}

/// Where the linter comes from.
///
/// A [`LinterSource::Locate`] is only resolved once a file actually needs
/// linting, so a directory without Lua files never touches the linter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinterSource {
    Resolved(Linter),
    /// Locate on demand, with the optional `--linter` override
    Locate(Option<PathBuf>),
}

impl LinterSource {
    pub fn resolve(&self) -> Result<Linter, LuahookError> {
        match self {
            Self::Resolved(linter) => Ok(linter.clone()),
            Self::Locate(override_path) => Linter::locate(override_path.as_deref()),
        }
    }
}

impl From<Linter> for LinterSource {
    fn from(linter: Linter) -> Self {
        Self::Resolved(linter)
    }
}

fn is_bare_name(path: &Path) -> bool {
    let mut components = path.components();
    matches!(
        (components.next(), components.next()),
        (Some(std::path::Component::Normal(_)), None)
    )
}

fn bundled_linter_path() -> Result<PathBuf, LuahookError> {
    let exe = std::env::current_exe()?;
    let install_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(bundled_linter_in(install_dir))
}

/// Path of the bundled linter inside an installation directory.
#[must_use]
pub fn bundled_linter_in(install_dir: &Path) -> PathBuf {
    let mut name = OsStr::new(LINTER_NAME).to_os_string();
    name.push(std::env::consts::EXE_SUFFIX);
    install_dir.join(BUNDLED_BIN_DIR).join(name)
}
