//! Core domain types for gplconv.
//!
//! - `ColorRecord` - one named RGB triple
//! - `Palette` - a named, ordered list of colour records

mod colour;
mod palette;

pub use colour::{ColorRecord, RgbKey};
pub use palette::Palette;
