//! CLI argument definitions (clap)

use clap::Parser;
use std::path::PathBuf;

/// luahook - run luacheck over a Lua file or a whole source tree
#[derive(Parser, Debug)]
#[command(name = "luahook")]
#[command(about = "Run luacheck over a Lua file or every *.lua file under a directory")]
#[command(long_about = r#"
luahook runs the luacheck binary bundled next to it (bin/luacheck) on Lua sources.

For a directory, every *.lua file below it is checked one at a time. The output of
each file that reports errors is printed; if none does, a single "0 error" line is
printed. For a single file, luacheck's output is printed unchanged.

EXAMPLES:
  # Check every Lua file in a project
  luahook ./scripts

  # Check one file
  luahook ./scripts/main.lua

  # Use a luacheck found on PATH instead of the bundled one
  luahook --linter luacheck ./scripts

Options must come before PATH. Everything from PATH onwards is taken as a path,
so a file named -x.lua can be checked with `luahook -x.lua`.

EXIT CODES:
  0   all files passed (or a single file was checked)
  1   internal error while walking the tree or writing output
  2   wrong number of arguments, missing path, or unsupported path type
  3   at least one file failed
  70  the linter could not be run
"#)]
#[command(version)]
pub struct Cli {
    /// Lua file or directory to check (exactly one)
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub paths: Vec<PathBuf>,

    /// Linter binary to use instead of the bundled bin/luacheck
    #[arg(long, value_name = "PATH")]
    pub linter: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_paths_collected() {
        let cli = Cli::try_parse_from(["luahook", "a", "b"]).unwrap();
        assert_eq!(cli.paths, vec![PathBuf::from("a"), PathBuf::from("b")]);
        assert!(cli.linter.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_no_paths_parses() {
        let cli = Cli::try_parse_from(["luahook"]).unwrap();
        assert!(cli.paths.is_empty());
    }

    #[test]
    fn test_linter_and_verbose_flags() {
        let cli =
            Cli::try_parse_from(["luahook", "--linter", "/opt/luacheck", "-v", "src"]).unwrap();
        assert_eq!(cli.linter, Some(PathBuf::from("/opt/luacheck")));
        assert!(cli.verbose);
        assert_eq!(cli.paths, vec![PathBuf::from("src")]);
    }

    #[test]
    fn test_hyphen_led_file_name_is_a_path() {
        let cli = Cli::try_parse_from(["luahook", "-x.lua"]).unwrap();
        assert_eq!(cli.paths, vec![PathBuf::from("-x.lua")]);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_unknown_option_after_path_counts_as_path() {
        let cli = Cli::try_parse_from(["luahook", "a", "--bogus"]).unwrap();
        assert_eq!(cli.paths, vec![PathBuf::from("a"), PathBuf::from("--bogus")]);
    }

    #[test]
    fn test_options_before_hyphen_led_path() {
        let cli = Cli::try_parse_from(["luahook", "--linter", "luacheck", "-v", "-x.lua"]).unwrap();
        assert_eq!(cli.linter, Some(PathBuf::from("luacheck")));
        assert!(cli.verbose);
        assert_eq!(cli.paths, vec![PathBuf::from("-x.lua")]);
    }
}
