//! Out-of-range channel handling.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::FormatError;
use crate::output::plural;
use crate::pipeline::dedupe;
use crate::types::Palette;
use crate::validation::{Diagnostic, ValidationResult};

/// What to do with channels outside `0..=255` before export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChannelPolicy {
    /// Fail the palette.
    #[default]
    Reject,
    /// Clamp to the nearest valid value.
    Clamp,
    /// Export the value as-is.
    PassThrough,
}

/// Apply the channel policy to a deduplicated palette still in file order.
///
/// Every corrected or passed-through channel is reported as a warning.
/// Clamping can make two colours equal, so the palette is deduplicated again
/// afterwards and the earlier colour in the file survives.
pub fn apply_channel_policy(
    mut palette: Palette,
    policy: ChannelPolicy,
) -> Result<(Palette, ValidationResult), FormatError> {
    let mut result = ValidationResult::new();

    match policy {
        ChannelPolicy::Reject => {
            for colour in &palette.colors {
                if let Some((channel, value)) = colour.out_of_range().next() {
                    return Err(FormatError::OutOfRangeChannel {
                        name: colour.name.clone(),
                        channel,
                        value,
                    });
                }
            }
        }
        ChannelPolicy::Clamp => {
            for colour in &mut palette.colors {
                let bad: Vec<_> = colour.out_of_range().collect();
                for (channel, value) in bad {
                    let clamped = value.clamp(0, 255);
                    *colour.channel_mut(channel) = clamped;
                    result.push(Diagnostic::warning(
                        "gplconv::export::clamped",
                        format!(
                            "Clamped {} channel of '{}' from {} to {}",
                            channel, colour.name, value, clamped
                        ),
                    ));
                }
            }

            let before = palette.len();
            palette.colors = dedupe(std::mem::take(&mut palette.colors));
            let dropped = before - palette.len();
            if dropped > 0 {
                result.push(Diagnostic::warning(
                    "gplconv::export::clamp-duplicate",
                    format!(
                        "Dropped {} that matched an earlier colour after clamping",
                        plural(dropped, "colour", "colours")
                    ),
                ));
            }
        }
        ChannelPolicy::PassThrough => {
            for colour in &palette.colors {
                for (channel, value) in colour.out_of_range() {
                    result.push(Diagnostic::warning(
                        "gplconv::export::pass-through",
                        format!(
                            "Exporting {} channel {} of '{}' unchanged",
                            channel, value, colour.name
                        ),
                    ));
                }
            }
        }
    }

    Ok((palette, result))
}
