//! Parse, deduplicate and sort a palette.
//!
//! Deduplication runs before sorting so the first colour in file order wins
//! an RGB collision, regardless of where its name sorts. The channel policy
//! runs between the two for the same reason: clamping can create new
//! collisions, and those must also resolve in file order.

mod dedupe;
mod sort;

pub use dedupe::{dedupe, dedupe_by_key};
pub use sort::sort_by_name;

use crate::error::FormatError;
use crate::export::{apply_channel_policy, ChannelPolicy};
use crate::parser::parse_gpl;
use crate::types::Palette;
use crate::validation::ValidationResult;

/// A processed palette with counts from each stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    pub palette: Palette,
    /// Colour rows read by the parser.
    pub parsed: usize,
    /// Rows dropped as RGB duplicates.
    pub duplicates: usize,
}

/// Run the full pipeline over raw palette text.
pub fn process(source: &str) -> Result<Palette, FormatError> {
    process_with_stats(source).map(|p| p.palette)
}

/// Run the full pipeline, keeping per-stage counts.
pub fn process_with_stats(source: &str) -> Result<Processed, FormatError> {
    let mut palette = parse_gpl(source)?;
    let parsed = palette.len();
    let duplicates = palette.dedupe();
    palette.sort();

    Ok(Processed {
        palette,
        parsed,
        duplicates,
    })
}

/// Run the full pipeline with a channel policy applied before sorting.
///
/// Returns the policy's diagnostics alongside the processed palette.
pub fn process_with_policy(
    source: &str,
    policy: ChannelPolicy,
) -> Result<(Processed, ValidationResult), FormatError> {
    let mut palette = parse_gpl(source)?;
    let parsed = palette.len();
    let duplicates = palette.dedupe();

    let (mut palette, diagnostics) = apply_channel_policy(palette, policy)?;
    palette.sort();

    Ok((
        Processed {
            palette,
            parsed,
            duplicates,
        },
        diagnostics,
    ))
}
