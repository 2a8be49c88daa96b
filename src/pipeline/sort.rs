//! Case-insensitive name ordering.

use crate::types::ColorRecord;

/// Sort colours by lowercased name in code-point order.
///
/// The sort is stable: colours with equal keys keep their relative order.
pub fn sort_by_name(mut colors: Vec<ColorRecord>) -> Vec<ColorRecord> {
    colors.sort_by_key(|c| c.name.to_lowercase());
    colors
}
