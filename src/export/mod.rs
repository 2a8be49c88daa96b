//! Colour list exporters.
//!
//! The pipeline hands each finished palette to an [`Exporter`], which owns
//! the artifact's byte format. One artifact is written per palette, named
//! after the palette.

mod gpl;
mod json;
mod policy;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};
use crate::types::Palette;

pub use gpl::{GplExporter, GPL_HEADER};
pub use json::JsonExporter;
pub use policy::{apply_channel_policy, ChannelPolicy};

/// Output artifact format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    /// JSON named colour list with 0.0-1.0 channels
    #[default]
    Json,
    /// Canonical GIMP palette
    Gpl,
}

impl ExportFormat {
    /// File extension for artifacts of this format.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Gpl => "gpl",
        }
    }

    /// Get the exporter for this format.
    pub fn exporter(self) -> Box<dyn Exporter> {
        match self {
            ExportFormat::Json => Box::new(JsonExporter),
            ExportFormat::Gpl => Box::new(GplExporter),
        }
    }
}

/// Persists a palette as a named colour list.
pub trait Exporter {
    fn format(&self) -> ExportFormat;

    /// Write the artifact bytes for one palette.
    fn write(&self, palette: &Palette, out: &mut dyn Write) -> Result<()>;

    /// Render the artifact to a string.
    fn render(&self, palette: &Palette) -> Result<String> {
        let mut buf = Vec::new();
        self.write(palette, &mut buf)?;
        String::from_utf8(buf).map_err(|e| ConvertError::Export {
            message: format!("Exporter produced invalid UTF-8: {}", e),
            help: None,
        })
    }
}

/// File stem for a palette's artifact.
///
/// Path separators left in the palette name become `_`. A palette without a
/// name falls back to `fallback` (usually the input file stem).
pub fn artifact_name(palette_name: &str, fallback: &str) -> String {
    let name = if palette_name.is_empty() {
        fallback
    } else {
        palette_name
    };
    name.replace(['/', '\\'], "_")
}

/// Write a palette's artifact into `dir`, returning the file path.
pub fn export_to_dir(
    exporter: &dyn Exporter,
    palette: &Palette,
    dir: &Path,
    fallback: &str,
) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| ConvertError::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let file_name = format!(
        "{}.{}",
        artifact_name(&palette.name, fallback),
        exporter.format().extension()
    );
    let path = dir.join(file_name);

    let contents = exporter.render(palette)?;
    fs::write(&path, contents).map_err(|e| ConvertError::Io {
        path: path.clone(),
        message: format!("Failed to write colour list: {}", e),
    })?;

    Ok(path)
}
