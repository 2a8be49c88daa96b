//! Convert command implementation.
//!
//! Converts every discovered palette and writes one colour list per palette.

use std::path::PathBuf;

use clap::Args;

use crate::convert::{convert_all, ConvertOptions};
use crate::discovery::Manifest;
use crate::error::{ConvertError, Result};
use crate::export::{ChannelPolicy, ExportFormat};
use crate::output::{display_path, plural, Printer};
use crate::source::FsSource;

use super::resolve_inputs;

/// Convert GIMP palettes into named colour lists
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Palette files or directories (default: manifest sources)
    pub paths: Vec<PathBuf>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// How to handle channels outside 0-255
    #[arg(long, value_enum)]
    pub out_of_range: Option<ChannelPolicy>,

    /// Show per-palette colour counts
    #[arg(long, short)]
    pub verbose: bool,
}

impl ConvertArgs {
    /// Resolve settings: flags override the manifest.
    pub fn options(&self, manifest: &Manifest) -> ConvertOptions {
        let mut options = ConvertOptions::from_manifest(manifest);
        if let Some(output) = &self.output {
            options.output = output.clone();
        }
        if let Some(format) = self.format {
            options.format = format;
        }
        if let Some(policy) = self.out_of_range {
            options.policy = policy;
        }
        options
    }
}

pub fn run(args: ConvertArgs, printer: &Printer) -> Result<()> {
    let discovery = resolve_inputs(&args.paths)?;
    let options = args.options(&discovery.manifest);
    let files = &discovery.scan.palettes;

    if files.is_empty() {
        printer.warning("Warning", "no palette files found");
        return Ok(());
    }

    printer.status(
        "Converting",
        &format!(
            "{} to {}",
            plural(files.len(), "palette", "palettes"),
            display_path(&options.output)
        ),
    );

    let report = convert_all(&FsSource, files, &options, |path, result| match result {
        Ok(converted) => {
            printer.status(
                "Wrote",
                &format!(
                    "{} {}",
                    printer.bold(&display_path(&converted.output)),
                    printer.dim(&format!("({})", plural(converted.colors, "colour", "colours")))
                ),
            );
            printer.verbose(
                "Parsed",
                &format!(
                    "{}: {} read, {} dropped",
                    display_path(path),
                    plural(converted.parsed, "row", "rows"),
                    plural(converted.duplicates, "duplicate", "duplicates")
                ),
            );
            for diagnostic in converted.diagnostics.iter() {
                printer.diagnostic(diagnostic);
            }
        }
        Err(error) => printer.error("Failed", &error.to_string()),
    });

    if report.is_success() {
        printer.status(
            "Finished",
            &format!(
                "{} ({})",
                plural(report.converted.len(), "palette", "palettes"),
                plural(report.warning_count(), "warning", "warnings")
            ),
        );
        Ok(())
    } else {
        Err(ConvertError::Build {
            message: format!(
                "{} of {} failed",
                plural(report.failed.len(), "palette", "palettes"),
                report.total()
            ),
            help: Some("Fix the reported palettes and run again; converted palettes were kept".to_string()),
        })
    }
}
