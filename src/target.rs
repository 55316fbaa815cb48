//! Classification of the path argument

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::InputError;

/// What the single path argument refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckTarget {
    Directory(PathBuf),
    File(PathBuf),
}

/// Classify `path`, following symlinks.
///
/// Anything that exists but is neither a directory nor a regular file
/// (FIFO, socket, device) is rejected.
pub fn classify(path: &Path) -> Result<CheckTarget, InputError> {
    let metadata = fs::metadata(path).map_err(|_| InputError::PathNotFound {
        path: path.to_path_buf(),
    })?;

    if metadata.is_dir() {
        Ok(CheckTarget::Directory(path.to_path_buf()))
    } else if metadata.is_file() {
        Ok(CheckTarget::File(path.to_path_buf()))
    } else {
        Err(InputError::InvalidPathType {
            path: path.to_path_buf(),
        })
    }
}

/// Require exactly one path argument.
pub fn single_path(paths: &[PathBuf]) -> Result<&Path, InputError> {
    match paths {
        [path] => Ok(path.as_path()),
        _ => Err(InputError::ArgumentCount { given: paths.len() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_classify_directory_and_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("init.lua");
        fs::write(&file, "").unwrap();

        assert_eq!(
            classify(temp.path()).unwrap(),
            CheckTarget::Directory(temp.path().to_path_buf())
        );
        assert_eq!(classify(&file).unwrap(), CheckTarget::File(file.clone()));
    }

    #[test]
    fn test_classify_missing_path() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("gone");
        assert_eq!(
            classify(&missing).unwrap_err(),
            InputError::PathNotFound { path: missing }
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_classify_special_file() {
        let path = Path::new("/dev/null");
        assert_eq!(
            classify(path).unwrap_err(),
            InputError::InvalidPathType {
                path: path.to_path_buf()
            }
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_classify_dangling_symlink_is_missing() {
        let temp = TempDir::new().unwrap();
        let link = temp.path().join("dangling.lua");
        std::os::unix::fs::symlink(temp.path().join("nowhere"), &link).unwrap();
        assert!(matches!(
            classify(&link).unwrap_err(),
            InputError::PathNotFound { .. }
        ));
    }

    #[test]
    fn test_single_path_counts() {
        assert_eq!(
            single_path(&[]).unwrap_err(),
            InputError::ArgumentCount { given: 0 }
        );
        let one = vec![PathBuf::from("src")];
        assert_eq!(single_path(&one).unwrap(), Path::new("src"));
        let two = vec![PathBuf::from("a"), PathBuf::from("b")];
        assert_eq!(
            single_path(&two).unwrap_err(),
            InputError::ArgumentCount { given: 2 }
        );
    }
}
