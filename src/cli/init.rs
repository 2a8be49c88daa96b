//! Init command implementation.
//!
//! Generates a `gplconv.yaml` manifest from discovered palette files.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover, Manifest, MANIFEST_FILENAME};
use crate::error::{ConvertError, Result};
use crate::output::{display_path, plural, Printer};

/// Initialize a project by generating a gplconv.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing gplconv.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(ConvertError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    printer.status("Scanning", &display_path(&args.path));
    let discovery = discover(&args.path)?;

    // Directories holding palettes, relative to the project root
    let mut source_dirs = BTreeSet::new();
    for file in &discovery.scan.palettes {
        if let Some(parent) = file.parent() {
            let relative = parent.strip_prefix(&discovery.root).unwrap_or(parent);
            if relative == Path::new("") {
                source_dirs.insert(".".to_string());
            } else {
                source_dirs.insert(format!("{}/", relative.display()));
            }
        }
    }

    let mut manifest = Manifest::default();
    // A lone "." is the default and doesn't need listing
    if !(source_dirs.len() == 1 && source_dirs.contains(".")) {
        manifest.sources = source_dirs.iter().cloned().collect();
    }

    let yaml = manifest.to_yaml()?;
    fs::write(&manifest_path, yaml).map_err(|e| ConvertError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    if !source_dirs.is_empty() {
        let dirs: Vec<&str> = source_dirs.iter().map(|s| s.as_str()).collect();
        printer.info("Discovered", &dirs.join(", "));
    }

    printer.status(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILENAME,
            plural(discovery.scan.total(), "palette", "palettes")
        ),
    );

    Ok(())
}
