//! Colour record type.

use std::fmt;

use palette::Srgb;
use serde::Serialize;

use crate::error::Channel;

/// Deduplication key: the (red, green, blue) triple.
pub type RgbKey = (i64, i64, i64);

/// One named RGB triple read from a palette row.
///
/// Channels are stored as parsed, without range checks. Use
/// [`ColorRecord::out_of_range`] to find values outside `0..=255`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ColorRecord {
    pub name: String,
    pub red: i64,
    pub green: i64,
    pub blue: i64,
}

impl ColorRecord {
    /// Create a new record.
    pub fn new(name: impl Into<String>, red: i64, green: i64, blue: i64) -> Self {
        Self {
            name: name.into(),
            red,
            green,
            blue,
        }
    }

    /// The key colours are deduplicated by. The name is not part of it.
    pub fn rgb(&self) -> RgbKey {
        (self.red, self.green, self.blue)
    }

    /// Get a single channel value.
    pub fn channel(&self, channel: Channel) -> i64 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Mutable access to a single channel.
    pub fn channel_mut(&mut self, channel: Channel) -> &mut i64 {
        match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
        }
    }

    /// Channels whose value falls outside `0..=255`, in column order.
    pub fn out_of_range(&self) -> impl Iterator<Item = (Channel, i64)> + '_ {
        Channel::ALL
            .into_iter()
            .map(move |c| (c, self.channel(c)))
            .filter(|(_, v)| !(0..=255).contains(v))
    }

    /// Check if every channel is a valid 8-bit value.
    pub fn is_in_range(&self) -> bool {
        self.out_of_range().next().is_none()
    }

    /// Convert to an 8-bit sRGB colour, if every channel is in range.
    pub fn to_srgb(&self) -> Option<Srgb<u8>> {
        let r = u8::try_from(self.red).ok()?;
        let g = u8::try_from(self.green).ok()?;
        let b = u8::try_from(self.blue).ok()?;
        Some(Srgb::new(r, g, b))
    }

    /// Channels mapped to the 0.0-1.0 display range, rounded to three decimals.
    ///
    /// Out-of-range values are scaled the same way and land outside 0.0-1.0.
    pub fn components(&self) -> [f64; 3] {
        match self.to_srgb() {
            Some(srgb) => {
                let f: Srgb<f32> = srgb.into_format();
                [f.red, f.green, f.blue].map(|c| round3(c as f64))
            }
            None => [self.red, self.green, self.blue].map(|c| round3(c as f64 / 255.0)),
        }
    }

    /// Hex form (`#RRGGBB`), if every channel is in range.
    pub fn hex(&self) -> Option<String> {
        self.to_srgb()
            .map(|c| format!("#{:02X}{:02X}{:02X}", c.red, c.green, c.blue))
    }
}

impl fmt::Display for ColorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hex() {
            Some(hex) => write!(f, "{} {}", hex, self.name),
            None => write!(
                f,
                "rgb({}, {}, {}) {}",
                self.red, self.green, self.blue, self.name
            ),
        }
    }
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
