//! File system scanner for discovering palette files.
//!
//! Recursively scans directories for files with the manifest's palette
//! extension (`.gpl` by default).

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// Result of scanning for palette files.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// Discovered palette files, in scan order.
    pub palettes: Vec<PathBuf>,
}

impl ScanResult {
    /// Create a new empty scan result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of discovered files.
    pub fn total(&self) -> usize {
        self.palettes.len()
    }

    /// Check if no files were discovered.
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// Merge another scan result into this one, skipping paths already seen.
    pub fn merge(&mut self, other: ScanResult) {
        for path in other.palettes {
            if !self.palettes.contains(&path) {
                self.palettes.push(path);
            }
        }
    }
}

/// Scan a directory for palette files.
///
/// Entries are visited in file-name order so batches are deterministic.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        if manifest.is_excluded(relative) {
            continue;
        }

        if manifest.is_palette_file(path) {
            result.palettes.push(path.to_path_buf());
        }
    }

    result
}

/// Scan multiple source directories relative to a base path.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        result.merge(scan_directory(&source_path, manifest));
    }

    result
}
