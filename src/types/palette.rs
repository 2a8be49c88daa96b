//! Palette type: a named, ordered list of colour records.

use serde::Serialize;

use crate::pipeline::{dedupe, sort_by_name};

use super::ColorRecord;

/// A named, ordered collection of colours read from one palette file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Palette {
    /// Palette name from the last `Name:` directive (empty if none).
    pub name: String,

    /// Colours, in file order until deduplicated and sorted.
    pub colors: Vec<ColorRecord>,
}

impl Palette {
    /// Create a new empty palette.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: Vec::new(),
        }
    }

    /// Append a colour.
    pub fn push(&mut self, color: ColorRecord) {
        self.colors.push(color);
    }

    /// Get a colour by exact name.
    pub fn get(&self, name: &str) -> Option<&ColorRecord> {
        self.colors.iter().find(|c| c.name == name)
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if the palette has no colours.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Check if the palette has a name.
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    /// Drop colours that repeat an earlier RGB triple.
    ///
    /// Returns the number of colours removed.
    pub fn dedupe(&mut self) -> usize {
        let before = self.colors.len();
        self.colors = dedupe(std::mem::take(&mut self.colors));
        before - self.colors.len()
    }

    /// Sort colours by name, case-insensitively.
    pub fn sort(&mut self) {
        self.colors = sort_by_name(std::mem::take(&mut self.colors));
    }

    /// Iterate over colour names.
    pub fn color_names(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(|c| c.name.as_str())
    }
}
