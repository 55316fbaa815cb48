//! Lua source discovery
//!
//! Walks a directory tree and collects every non-directory entry whose file
//! name matches `*.lua`. Children of each directory are visited in file-name
//! order, depth first, so the same tree always yields the same list.

use globset::{Glob, GlobMatcher};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LuahookError;

/// File-name pattern for Lua sources.
pub const LUA_PATTERN: &str = "*.lua";

/// Recursive finder for files matching a file-name glob.
#[derive(Debug, Clone)]
pub struct SourceFinder {
    matcher: GlobMatcher,
}

impl SourceFinder {
    /// Finder for Lua sources.
    pub fn lua() -> Result<Self, LuahookError> {
        Self::with_pattern(LUA_PATTERN)
    }

    /// Finder for an arbitrary file-name glob.
    pub fn with_pattern(pattern: &str) -> Result<Self, LuahookError> {
        let glob = Glob::new(pattern).map_err(|e| LuahookError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            matcher: glob.compile_matcher(),
        })
    }

    /// Whether a bare file name matches.
    #[must_use]
    pub fn matches_name(&self, name: &Path) -> bool {
        self.matcher.is_match(name)
    }

    /// Collect matching paths under `root`.
    ///
    /// Returned paths are `root` joined with the relative path, mirroring
    /// what `find <root> -name '*.lua'` prints. Symlinked directories are not
    /// descended into. A subdirectory that cannot be read is skipped with a
    /// warning; failure to read `root` itself is an error.
    pub fn find(&self, root: &Path) -> Result<Vec<PathBuf>, LuahookError> {
        let mut found = Vec::new();
        let entries = read_sorted(root).map_err(|source| LuahookError::Discovery {
            path: root.to_path_buf(),
            source,
        })?;
        self.visit(entries, &mut found);
        Ok(found)
    }

    fn visit(&self, entries: Vec<fs::DirEntry>, found: &mut Vec<PathBuf>) {
        for entry in entries {
            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable entry");
                    continue;
                }
            };

            if file_type.is_dir() {
                match read_sorted(&path) {
                    Ok(children) => self.visit(children, found),
                    Err(e) => {
                        tracing::warn!(
                            path = %path.display(),
                            error = %e,
                            "Skipping unreadable directory"
                        );
                    }
                }
                continue;
            }

            if !self.matches_name(Path::new(&entry.file_name())) {
                continue;
            }

            // A symlink named like a source file may still point at a directory.
            if file_type.is_symlink() && path.is_dir() {
                tracing::debug!(path = %path.display(), "Skipping symlinked directory");
                continue;
            }

            tracing::trace!(path = %path.display(), "Discovered source file");
            found.push(path);
        }
    }
}

fn read_sorted(dir: &Path) -> std::io::Result<Vec<fs::DirEntry>> {
    let mut entries = fs::read_dir(dir)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(fs::DirEntry::file_name);
    Ok(entries)
}
