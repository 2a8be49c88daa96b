//! Canonical GPL writer.
//!
//! Emits the subset of the format that [`crate::parser::parse_gpl`] reads, so
//! a processed palette survives a write/parse cycle unchanged. Colours with
//! a negative channel (only possible under the pass-through policy) don't
//! start with a digit and are skipped on the way back in.

use std::io::Write;

use crate::error::Result;
use crate::parser::NAME_DIRECTIVE;
use crate::types::Palette;

use super::{ExportFormat, Exporter};

/// GPL magic header line.
pub const GPL_HEADER: &str = "GIMP Palette";

/// Writes palettes back out as tab-separated GIMP palettes.
#[derive(Debug, Default, Clone, Copy)]
pub struct GplExporter;

impl Exporter for GplExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Gpl
    }

    fn write(&self, palette: &Palette, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", GPL_HEADER)?;
        writeln!(out, "{} {}", NAME_DIRECTIVE, palette.name)?;
        writeln!(out, "#")?;

        for colour in &palette.colors {
            writeln!(
                out,
                "{}\t{}\t{}\t{}",
                colour.red, colour.green, colour.blue, colour.name
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::process;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_gpl_output() {
        let palette = process("Name: Pair\n0\t0\t255\tBlue\n255\t0\t0\tRed\n").unwrap();
        let text = GplExporter.render(&palette).unwrap();

        assert_eq!(
            text,
            "GIMP Palette\nName: Pair\n#\n0\t0\t255\tBlue\n255\t0\t0\tRed\n"
        );
    }

    #[test]
    fn test_gpl_is_a_fixed_point() {
        let source = "GIMP Palette\nName: Summer/Fall\n#\n\n9\t9\t9\tzinc\n 1\t2\t3\tignored\n200  \t100\t0\tAmber\n9\t9\t9\tashen\n";
        let first = process(source).unwrap();
        let written = GplExporter.render(&first).unwrap();
        let second = process(&written).unwrap();

        assert_eq!(first, second);
        assert_eq!(GplExporter.render(&second).unwrap(), written);
    }
}
