//! JSON named colour list.
//!
//! Channels are written in the 0.0-1.0 range, rounded to three decimals,
//! with an opaque alpha:
//!
//! ```json
//! {
//!   "name": "Summer",
//!   "colors": [
//!     { "name": "Red", "red": 1.0, "green": 0.0, "blue": 0.0, "alpha": 1.0, "hex": "#FF0000" }
//!   ]
//! }
//! ```

use std::io::Write;

use serde::Serialize;

use crate::error::{ConvertError, Result};
use crate::types::{ColorRecord, Palette};

use super::{ExportFormat, Exporter};

#[derive(Serialize)]
struct ColorList<'a> {
    name: &'a str,
    colors: Vec<NamedColor<'a>>,
}

#[derive(Serialize)]
struct NamedColor<'a> {
    name: &'a str,
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    hex: Option<String>,
}

impl<'a> From<&'a ColorRecord> for NamedColor<'a> {
    fn from(colour: &'a ColorRecord) -> Self {
        let [red, green, blue] = colour.components();
        Self {
            name: &colour.name,
            red,
            green,
            blue,
            alpha: 1.0,
            hex: colour.hex(),
        }
    }
}

/// Writes palettes as pretty-printed JSON colour lists.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn write(&self, palette: &Palette, out: &mut dyn Write) -> Result<()> {
        let list = ColorList {
            name: &palette.name,
            colors: palette.colors.iter().map(NamedColor::from).collect(),
        };

        serde_json::to_writer_pretty(&mut *out, &list).map_err(|e| ConvertError::Export {
            message: format!("Failed to write JSON colour list: {}", e),
            help: None,
        })?;
        writeln!(out)?;

        Ok(())
    }
}
