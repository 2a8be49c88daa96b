//! Batch conversion: read, process and export one palette per file.
//!
//! Each file runs through the whole pipeline on its own. A failure is
//! recorded against that file and the batch moves on to the next one.

use std::path::{Path, PathBuf};

use crate::discovery::Manifest;
use crate::error::{ConvertError, Result};
use crate::export::{export_to_dir, ChannelPolicy, ExportFormat, Exporter};
use crate::pipeline::process_with_policy;
use crate::source::TextSource;
use crate::validation::{
    check_duplicate_names, check_empty_palette, check_palette_name, Diagnostic, ValidationResult,
};

/// Fallback artifact name when neither the palette nor the file has one.
const UNNAMED: &str = "palette";

/// Settings for a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub output: PathBuf,
    pub format: ExportFormat,
    pub policy: ChannelPolicy,
}

impl ConvertOptions {
    /// Take settings from a manifest.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self {
            output: manifest.output.clone(),
            format: manifest.format,
            policy: manifest.out_of_range,
        }
    }
}

/// A successfully converted file.
#[derive(Debug, Clone)]
pub struct Converted {
    pub input: PathBuf,
    pub output: PathBuf,
    pub palette_name: String,
    /// Colours written to the artifact.
    pub colors: usize,
    /// Colour rows read from the input.
    pub parsed: usize,
    /// Rows dropped as RGB duplicates.
    pub duplicates: usize,
    pub diagnostics: ValidationResult,
}

/// A file that could not be converted.
#[derive(Debug)]
pub struct Failure {
    pub input: PathBuf,
    pub error: ConvertError,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<Converted>,
    pub failed: Vec<Failure>,
}

impl BatchReport {
    /// Check if every file converted.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Number of files attempted.
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }

    /// Number of warnings across converted files.
    pub fn warning_count(&self) -> usize {
        self.converted
            .iter()
            .map(|c| c.diagnostics.warning_count())
            .sum()
    }

    fn record(&mut self, input: &Path, result: Result<Converted>) {
        match result {
            Ok(converted) => self.converted.push(converted),
            Err(error) => self.failed.push(Failure {
                input: input.to_path_buf(),
                error,
            }),
        }
    }
}

/// Convert a single palette file.
pub fn convert_file(
    source: &dyn TextSource,
    exporter: &dyn Exporter,
    path: &Path,
    options: &ConvertOptions,
) -> Result<Converted> {
    let text = source.read_text(path)?;
    let (processed, mut diagnostics) =
        process_with_policy(&text, options.policy).map_err(|e| ConvertError::format(path, e))?;
    let palette = processed.palette;

    diagnostics.merge(check_palette_name(&palette));
    diagnostics.merge(check_empty_palette(&palette));
    diagnostics.merge(check_duplicate_names(&palette));

    let fallback = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(UNNAMED);
    let output = export_to_dir(exporter, &palette, &options.output, fallback)?;

    Ok(Converted {
        input: path.to_path_buf(),
        output,
        palette_name: palette.name,
        colors: palette.colors.len(),
        parsed: processed.parsed,
        duplicates: processed.duplicates,
        diagnostics,
    })
}

/// Convert every file, isolating failures.
///
/// `progress` is called once per file, in order, before the next file starts.
/// A file whose artifact path was already written earlier in the batch
/// overwrites it and carries a warning.
pub fn convert_all<F>(
    source: &dyn TextSource,
    paths: &[PathBuf],
    options: &ConvertOptions,
    mut progress: F,
) -> BatchReport
where
    F: FnMut(&Path, &Result<Converted>),
{
    let exporter = options.format.exporter();
    let mut report = BatchReport::default();

    for path in paths {
        let mut result = convert_file(source, exporter.as_ref(), path, options);

        if let Ok(converted) = &mut result {
            if let Some(earlier) = report
                .converted
                .iter()
                .find(|c| c.output == converted.output)
            {
                converted.diagnostics.push(Diagnostic::warning(
                    "gplconv::export::overwritten",
                    format!(
                        "Overwrote {} written from {}",
                        converted.output.display(),
                        earlier.input.display()
                    ),
                ));
            }
        }

        progress(path, &result);
        report.record(path, result);
    }

    report
}
