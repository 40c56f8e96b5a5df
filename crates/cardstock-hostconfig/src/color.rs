//! Color value parsing for host configuration documents.
//!
//! Host configuration colors come in exactly two textual forms:
//!
//! - `#RRGGBB`: opaque RGB
//! - `#AARRGGBB`: RGB with an explicit alpha channel
//!
//! Anything else (named colors, 3-digit shorthand, missing `#`) is rejected,
//! so an invalid color in a supplied document fails at the deserialization
//! boundary instead of reaching the renderer.
//!
//! # Example
//!
//! ```rust
//! use cardstock_hostconfig::Color;
//!
//! let opaque = Color::parse("#2E89FC").unwrap();
//! assert_eq!(opaque, Color::Rgb(0x2E, 0x89, 0xFC));
//! assert!(opaque.is_opaque());
//!
//! let subtle = Color::parse("#882E89FC").unwrap();
//! assert_eq!(subtle.alpha(), 0x88);
//! assert_eq!(subtle.to_string(), "#882E89FC");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, Serializer};
use thiserror::Error;

/// Error returned when a color string is not `#RRGGBB` or `#AARRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{value}': expected #RRGGBB or #AARRGGBB")]
pub struct ParseColorError {
    /// The rejected input.
    pub value: String,
}

impl ParseColorError {
    fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }
}

/// A color value from a host configuration document.
///
/// The two variants mirror the two accepted textual forms, so a document
/// round-trips through the same form it was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Opaque `#RRGGBB` color.
    Rgb(u8, u8, u8),
    /// `#AARRGGBB` color with an explicit alpha channel.
    Argb(u8, u8, u8, u8),
}

impl Color {
    /// Parses a color from its textual form.
    ///
    /// Hex digits are accepted in either case; the canonical form produced
    /// by [`Display`](fmt::Display) is uppercase.
    pub fn parse(s: &str) -> Result<Self, ParseColorError> {
        let hex = s.strip_prefix('#').ok_or_else(|| ParseColorError::new(s))?;

        // from_str_radix tolerates a leading sign, which is not a valid digit
        // here, so every byte is checked up front.
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::new(s));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ParseColorError::new(s))
        };

        match hex.len() {
            6 => Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::Argb(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(ParseColorError::new(s)),
        }
    }

    /// The alpha channel; `0xFF` for the opaque `Rgb` form.
    pub fn alpha(&self) -> u8 {
        match self {
            Color::Rgb(..) => 0xFF,
            Color::Argb(a, ..) => *a,
        }
    }

    /// The red channel.
    pub fn red(&self) -> u8 {
        match self {
            Color::Rgb(r, ..) => *r,
            Color::Argb(_, r, ..) => *r,
        }
    }

    /// The green channel.
    pub fn green(&self) -> u8 {
        match self {
            Color::Rgb(_, g, _) => *g,
            Color::Argb(_, _, g, _) => *g,
        }
    }

    /// The blue channel.
    pub fn blue(&self) -> u8 {
        match self {
            Color::Rgb(.., b) => *b,
            Color::Argb(.., b) => *b,
        }
    }

    /// True when the color has no transparency.
    pub fn is_opaque(&self) -> bool {
        self.alpha() == 0xFF
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(r, g, b) => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
            Color::Argb(a, r, g, b) => write!(f, "#{:02X}{:02X}{:02X}{:02X}", a, r, g, b),
        }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(D::Error::custom)
    }
}
