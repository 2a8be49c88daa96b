//! GIMP palette parser.
//!
//! Reads the subset of the GPL format that palette generators emit:
//!
//! ```text
//! GIMP Palette
//! Name: Summer
//! #
//! 255	0	0	Red
//! ```
//!
//! A line containing `Name:` sets the palette name, a line starting with a
//! decimal digit is a tab-separated `red green blue name` row, and anything
//! else is ignored.

use crate::error::{Channel, FormatError};
use crate::types::{ColorRecord, Palette};

/// Palette name directive.
pub const NAME_DIRECTIVE: &str = "Name:";

/// Parse raw palette text into a palette with colours in file order.
///
/// Colours are neither deduplicated nor sorted; see
/// [`crate::pipeline::process`] for the full pipeline.
pub fn parse_gpl(source: &str) -> Result<Palette, FormatError> {
    let mut palette = Palette::default();

    for (index, line) in source.split('\n').enumerate() {
        // Zero-length lines only; whitespace-only lines fall through and are
        // ignored because they don't start with a digit.
        if line.is_empty() {
            continue;
        }

        if let Some(name) = parse_name_directive(line) {
            palette.name = name;
        } else if line.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            palette.push(parse_colour_row(line, index + 1)?);
        }
    }

    Ok(palette)
}

/// Parse a `Name:` directive, returning the cleaned palette name.
///
/// Everything after the first `Name:` is trimmed and `/` becomes `-`.
fn parse_name_directive(line: &str) -> Option<String> {
    let (_, rest) = line.split_once(NAME_DIRECTIVE)?;
    Some(rest.trim().replace('/', "-"))
}

/// Parse a colour row: `red<TAB>green<TAB>blue<TAB>name`.
fn parse_colour_row(line: &str, line_number: usize) -> Result<ColorRecord, FormatError> {
    let fields: Vec<&str> = line.split('\t').collect();

    if fields.len() < 4 {
        return Err(FormatError::MissingFields {
            line_number,
            line: line.to_string(),
            found: fields.len(),
        });
    }

    let channel = |channel: Channel, field: &str| -> Result<i64, FormatError> {
        let value = field.trim();
        value
            .parse::<i64>()
            .map_err(|_| FormatError::NonIntegerChannel {
                line_number,
                line: line.to_string(),
                channel,
                value: value.to_string(),
            })
    };

    Ok(ColorRecord {
        red: channel(Channel::Red, fields[0])?,
        green: channel(Channel::Green, fields[1])?,
        blue: channel(Channel::Blue, fields[2])?,
        name: fields[3].trim().to_string(),
    })
}
