//! Check command implementation.
//!
//! Runs the pipeline and validation without writing anything.

use std::path::PathBuf;

use clap::Args;

use crate::error::{ConvertError, Result};
use crate::export::ChannelPolicy;
use crate::output::{display_path, plural, Printer};
use crate::pipeline::process_with_stats;
use crate::source::{FsSource, TextSource};
use crate::validation::validate_palette;

use super::resolve_inputs;

/// Check palette files without converting them
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Palette files or directories (default: manifest sources)
    pub paths: Vec<PathBuf>,

    /// How to handle channels outside 0-255 (default: manifest setting)
    #[arg(long, value_enum)]
    pub out_of_range: Option<ChannelPolicy>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let discovery = resolve_inputs(&args.paths)?;
    let policy = args.out_of_range.unwrap_or(discovery.manifest.out_of_range);

    let mut failed = 0;
    let mut warnings = 0;

    for path in &discovery.scan.palettes {
        let display = display_path(path);

        let processed = match FsSource
            .read_text(path)
            .and_then(|text| process_with_stats(&text).map_err(|e| ConvertError::format(path, e)))
        {
            Ok(processed) => processed,
            Err(error) => {
                printer.error("Failed", &error.to_string());
                failed += 1;
                continue;
            }
        };

        let result = validate_palette(&processed.palette, policy);

        printer.status(
            "Checked",
            &format!(
                "{} {}",
                display,
                printer.dim(&format!(
                    "({}, {} dropped)",
                    plural(processed.palette.len(), "colour", "colours"),
                    plural(processed.duplicates, "duplicate", "duplicates")
                ))
            ),
        );
        for diagnostic in result.iter() {
            printer.diagnostic(diagnostic);
        }

        warnings += result.warning_count();
        if result.has_errors() || (args.strict && result.has_warnings()) {
            failed += 1;
        }
    }

    let total = discovery.scan.total();
    if failed > 0 {
        return Err(ConvertError::Build {
            message: format!("{} of {} failed checks", plural(failed, "palette", "palettes"), total),
            help: None,
        });
    }

    printer.status(
        "Finished",
        &format!(
            "{} ({})",
            plural(total, "palette", "palettes"),
            plural(warnings, "warning", "warnings")
        ),
    );
    Ok(())
}
