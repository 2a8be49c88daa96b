//! Palette file discovery.
//!
//! Finds the palette files to convert, either from the sources listed in a
//! `gplconv.yaml` manifest or from paths given on the command line.
//!
//! # Example
//!
//! ```ignore
//! use gplconv::discovery::discover;
//!
//! let result = discover("./my-palettes")?;
//! println!("Found {} palettes", result.scan.total());
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use manifest::{Manifest, DEFAULT_EXTENSION};
pub use scanner::{scan_directory, scan_sources, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "gplconv.yaml";

/// Result of discovering palettes in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no gplconv.yaml was found).
    pub manifest: Manifest,

    /// Whether a gplconv.yaml manifest was found.
    pub has_manifest: bool,

    /// Discovered palette files.
    pub scan: ScanResult,
}

/// Load the manifest in `root`, if there is one.
pub fn load_manifest(root: &Path) -> Result<(Manifest, bool)> {
    let manifest_path = root.join(MANIFEST_FILENAME);
    if manifest_path.exists() {
        Ok((Manifest::load(&manifest_path)?, true))
    } else {
        Ok((Manifest::default(), false))
    }
}

/// Discover palettes in a project directory.
///
/// Uses the manifest's sources when a `gplconv.yaml` is present, otherwise
/// scans the whole directory.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();
    let (manifest, has_manifest) = load_manifest(&root)?;

    let scan = scan_sources(&manifest.effective_sources(), &root, &manifest);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        scan,
    })
}

/// Discover palettes from specific paths.
///
/// Directories are scanned recursively. Files named explicitly are always
/// included, whatever their extension.
pub fn discover_paths(paths: &[PathBuf], manifest: Manifest) -> DiscoveryResult {
    let mut scan = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            scan.merge(scan_directory(path, &manifest));
        } else {
            scan.merge(ScanResult {
                palettes: vec![path.clone()],
            });
        }
    }

    let root = paths
        .first()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    DiscoveryResult {
        root,
        manifest,
        has_manifest: false,
        scan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportFormat;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discover_empty_directory() {
        let dir = tempdir().unwrap();
        let result = discover(dir.path()).unwrap();

        assert!(!result.has_manifest);
        assert!(result.scan.is_empty());
    }

    #[test]
    fn test_discover_without_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.gpl"), "Name: A\n").unwrap();

        let result = discover(dir.path()).unwrap();

        assert!(!result.has_manifest);
        assert_eq!(result.scan.total(), 1);
    }

    #[test]
    fn test_discover_with_manifest() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(MANIFEST_FILENAME),
            "sources:\n  - palettes/\nformat: gpl\n",
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("palettes")).unwrap();
        fs::write(dir.path().join("palettes/a.gpl"), "Name: A\n").unwrap();
        fs::write(dir.path().join("ignored.gpl"), "Name: B\n").unwrap();

        let result = discover(dir.path()).unwrap();

        assert!(result.has_manifest);
        assert_eq!(result.manifest.format, ExportFormat::Gpl);
        assert_eq!(result.scan.total(), 1);
        assert!(result.scan.palettes[0].ends_with("palettes/a.gpl"));
    }

    #[test]
    fn test_discover_bad_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "sources: [unclosed").unwrap();

        assert!(discover(dir.path()).is_err());
    }

    #[test]
    fn test_discover_paths_mixed() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("more")).unwrap();
        fs::write(dir.path().join("more/b.gpl"), "").unwrap();
        let explicit = dir.path().join("a.txt");
        fs::write(&explicit, "").unwrap();

        let result = discover_paths(
            &[explicit.clone(), dir.path().join("more")],
            Manifest::default(),
        );

        assert_eq!(result.scan.total(), 2);
        assert_eq!(result.scan.palettes[0], explicit);
    }
}
