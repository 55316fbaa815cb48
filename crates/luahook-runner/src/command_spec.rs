use std::ffi::OsString;
use std::process::Command;

// ============================================================================
// CommandSpec - argv-style process specification
// ============================================================================

/// Specification for a command to execute.
///
/// Every linter invocation is described by a `CommandSpec` so that file paths
/// travel as discrete argv elements instead of being spliced into a shell
/// command line.
///
/// # Security
///
/// `CommandSpec` enforces that:
/// - Arguments are `Vec<OsString>`, NOT shell strings
/// - No shell string evaluation (`sh -c`, `cmd /C`) is used
/// - Non-UTF-8 paths survive unchanged
///
/// # Example
///
/// ```rust
/// use luahook_runner::CommandSpec;
/// use std::ffi::OsString;
///
/// let cmd = CommandSpec::new("luacheck")
///     .arg("src/main.lua")
///     .arg("--no-color");
///
/// assert_eq!(cmd.program, OsString::from("luacheck"));
/// assert_eq!(cmd.args.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// The program to execute
    pub program: OsString,
    /// Arguments as discrete elements (NOT shell strings)
    pub args: Vec<OsString>,
}

impl CommandSpec {
    /// Create a new `CommandSpec` for `program` with no arguments.
    #[must_use]
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Add a single argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add multiple arguments.
    ///
    /// ```rust
    /// use luahook_runner::CommandSpec;
    ///
    /// let cmd = CommandSpec::new("luacheck").args(["a.lua", "--no-color"]);
    /// assert_eq!(cmd.args.len(), 2);
    /// ```
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Program name for logs and error messages (lossy).
    #[must_use]
    pub fn program_display(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    /// Whole command line for debug logging (lossy, space separated).
    ///
    /// Only meant for humans; never feed this back to a shell.
    #[must_use]
    pub fn display_lossy(&self) -> String {
        std::iter::once(&self.program)
            .chain(self.args.iter())
            .map(|part| part.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Convert this `CommandSpec` into a `std::process::Command`.
    ///
    /// The resulting `Command` uses argv-style argument passing, so no shell
    /// injection is possible. The child inherits the working directory and
    /// environment of the caller.
    #[must_use]
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_spec_new() {
        let cmd = CommandSpec::new("luacheck");
        assert_eq!(cmd.program, OsString::from("luacheck"));
        assert!(cmd.args.is_empty());
    }

    #[test]
    fn test_command_spec_builder_chain() {
        let cmd = CommandSpec::new("luacheck")
            .arg("init.lua")
            .args(["--no-color"]);

        assert_eq!(
            cmd.args,
            vec![OsString::from("init.lua"), OsString::from("--no-color")]
        );
    }

    #[test]
    fn test_display_lossy_joins_program_and_args() {
        let cmd = CommandSpec::new("bin/luacheck").args(["a b.lua", "--no-color"]);
        assert_eq!(cmd.display_lossy(), "bin/luacheck a b.lua --no-color");
        assert_eq!(cmd.program_display(), "bin/luacheck");
    }

    #[test]
    fn test_shell_metacharacters_stay_single_arguments() {
        let cmd = CommandSpec::new("luacheck")
            .arg("dir with spaces/x.lua")
            .arg("a;rm -rf ~.lua")
            .arg("$(whoami).lua")
            .arg("`id`.lua");

        assert_eq!(cmd.args.len(), 4);
        assert_eq!(cmd.args[0], OsString::from("dir with spaces/x.lua"));
        assert_eq!(cmd.args[1], OsString::from("a;rm -rf ~.lua"));
        assert_eq!(cmd.args[2], OsString::from("$(whoami).lua"));
        assert_eq!(cmd.args[3], OsString::from("`id`.lua"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_argument_preserved() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(vec![b'f', 0xff, b'.', b'l', b'u', b'a']);
        let cmd = CommandSpec::new("luacheck").arg(raw.clone());
        assert_eq!(cmd.args[0], raw);
    }
}
