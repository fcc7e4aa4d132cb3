use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{ConcatError, Result, ValidationReason};

/// Ordered list of input files, each checked to be an existing regular file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFileList {
    paths: Vec<PathBuf>,
}

impl InputFileList {
    /// Checks every path before anything is written. The first bad path
    /// aborts the whole list.
    pub fn validate<I, P>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let paths: Vec<PathBuf> = paths.into_iter().map(Into::into).collect();
        for path in &paths {
            check_regular_file(path)?;
        }
        debug!("validated {} input files", paths.len());
        Ok(InputFileList { paths })
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(PathBuf::as_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }
}

// follows symlinks, like stat(2)
fn check_regular_file(path: &Path) -> Result<()> {
    let reason = match fs::metadata(path) {
        Ok(meta) if meta.is_file() => return Ok(()),
        Ok(_) => ValidationReason::NotAFile,
        Err(err) if err.kind() == io::ErrorKind::NotFound => ValidationReason::Missing,
        Err(err) => ValidationReason::Inaccessible(err),
    };
    Err(ConcatError::Validation {
        path: path.to_path_buf(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let b = dir.path().join("b.txt");
        let a = dir.path().join("a.txt");
        fs::write(&a, "AB").unwrap();
        fs::write(&b, "CD").unwrap();

        let list = InputFileList::validate([&b, &a]).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0), Some(b.as_path()));
        assert_eq!(list.get(1), Some(a.as_path()));
        assert_eq!(list.get(2), None);
    }

    #[test]
    fn test_missing_file_anywhere_fails() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        fs::write(&a, "AB").unwrap();
        let missing = dir.path().join("missing.txt");

        let err = InputFileList::validate([&a, &missing]).unwrap_err();
        match err {
            ConcatError::Validation {
                path,
                reason: ValidationReason::Missing,
            } => assert_eq!(path, missing),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = InputFileList::validate([dir.path()]).unwrap_err();
        assert!(matches!(
            err,
            ConcatError::Validation {
                reason: ValidationReason::NotAFile,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_list_is_valid() {
        let list = InputFileList::validate(Vec::<PathBuf>::new()).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
    }
}
