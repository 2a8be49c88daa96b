//! Validation for processed palettes.
//!
//! Runs a suite of checks against a palette and reports errors and
//! warnings. Used by `gplconv check` and by the batch converter.

mod checks;
mod warning;

pub use checks::{
    check_channel_ranges, check_duplicate_names, check_empty_palette, check_palette_name,
};
pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::export::ChannelPolicy;
use crate::types::Palette;

/// Run all validation checks against the palette.
///
/// `policy` decides whether out-of-range channels are errors or warnings.
pub fn validate_palette(palette: &Palette, policy: ChannelPolicy) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(check_palette_name(palette));
    result.merge(check_empty_palette(palette));
    result.merge(check_channel_ranges(palette, policy));
    result.merge(check_duplicate_names(palette));

    result
}
