//! Parser for GIMP palette (`.gpl`) files.
//!
//! # Usage
//!
//! ```ignore
//! use gplconv::parser::parse_gpl;
//!
//! let source = std::fs::read_to_string("palettes/summer.gpl")?;
//! let palette = parse_gpl(&source)?;
//!
//! for colour in &palette.colors {
//!     println!("{}", colour);
//! }
//! ```

pub mod gpl;

pub use gpl::{parse_gpl, NAME_DIRECTIVE};
