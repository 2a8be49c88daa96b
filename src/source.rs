//! Where palette text comes from.

use std::fs;
use std::path::Path;

use crate::error::{ConvertError, Result};

/// Supplies raw palette text for a path.
pub trait TextSource {
    fn read_text(&self, path: &Path) -> Result<String>;
}

/// Reads palettes from the file system as UTF-8.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSource;

impl TextSource for FsSource {
    fn read_text(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| ConvertError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read file: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_fs_source_reads_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.gpl");
        fs::write(&path, "Name: A\n").unwrap();

        assert_eq!(FsSource.read_text(&path).unwrap(), "Name: A\n");
    }

    #[test]
    fn test_fs_source_missing_file() {
        let dir = tempdir().unwrap();
        let err = FsSource.read_text(&dir.path().join("missing.gpl")).unwrap_err();
        assert!(matches!(err, ConvertError::Io { .. }));
    }

    #[test]
    fn test_fs_source_rejects_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin1.gpl");
        fs::write(&path, [b'N', b'a', 0xFF, b'\n']).unwrap();

        assert!(FsSource.read_text(&path).is_err());
    }
}
