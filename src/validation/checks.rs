//! Validation checks for processed palettes.
//!
//! Each check takes a `&Palette` and returns a `ValidationResult`.

use std::collections::HashMap;

use crate::export::ChannelPolicy;
use crate::types::Palette;

use super::warning::{Diagnostic, ValidationResult};

/// Check for channels outside `0..=255`.
///
/// Under [`ChannelPolicy::Reject`] these are errors, since conversion would
/// fail. Otherwise they are warnings and the policy corrects or keeps them.
pub fn check_channel_ranges(palette: &Palette, policy: ChannelPolicy) -> ValidationResult {
    let mut result = ValidationResult::new();

    for colour in &palette.colors {
        for (channel, value) in colour.out_of_range() {
            let message = format!(
                "Colour '{}' has {} channel {} outside 0..=255",
                colour.name, channel, value
            );
            let diagnostic = match policy {
                ChannelPolicy::Reject => {
                    Diagnostic::error("gplconv::validate::out-of-range", message)
                        .with_help("Fix the row, or pass --out-of-range clamp or pass-through")
                }
                ChannelPolicy::Clamp => {
                    Diagnostic::warning("gplconv::validate::out-of-range", message)
                        .with_help(format!("Will be clamped to {}", value.clamp(0, 255)))
                }
                ChannelPolicy::PassThrough => {
                    Diagnostic::warning("gplconv::validate::out-of-range", message)
                }
            };
            result.push(diagnostic);
        }
    }

    result
}

/// Check for a palette without a `Name:` directive.
pub fn check_palette_name(palette: &Palette) -> ValidationResult {
    let mut result = ValidationResult::new();

    if !palette.has_name() {
        result.push(
            Diagnostic::warning(
                "gplconv::validate::missing-name",
                "Palette has no Name: directive",
            )
            .with_help("The output file will be named after the input file"),
        );
    }

    result
}

/// Check for a palette with no colour rows.
pub fn check_empty_palette(palette: &Palette) -> ValidationResult {
    let mut result = ValidationResult::new();

    if palette.is_empty() {
        result.push(
            Diagnostic::warning(
                "gplconv::validate::empty-palette",
                format!("Palette '{}' has no colours", palette.name),
            )
            .with_help("Colour rows start with a digit: red<TAB>green<TAB>blue<TAB>name"),
        );
    }

    result
}

/// Check for colour names used by more than one colour.
///
/// Colour lists are keyed by name, so a repeated name shadows the earlier one.
pub fn check_duplicate_names(palette: &Palette) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for name in palette.color_names() {
        *counts.entry(name).or_insert(0) += 1;
    }

    let mut repeated: Vec<(&str, usize)> = counts.into_iter().filter(|(_, n)| *n > 1).collect();
    repeated.sort();

    for (name, count) in repeated {
        result.push(Diagnostic::warning(
            "gplconv::validate::duplicate-name",
            format!("Colour name '{}' is used by {} colours", name, count),
        ));
    }

    result
}
