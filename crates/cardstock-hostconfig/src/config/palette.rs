//! Semantic colors and the palette that resolves them.
//!
//! Card content names colors semantically (`accent`, `warning`, ...) and the
//! host decides what those names look like. Every semantic color resolves to
//! a normal/subtle pair so renderers can de-emphasize secondary text without
//! inventing colors of their own.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Semantic color names card content can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SemanticColor {
    Dark,
    Light,
    Accent,
    Attention,
    Good,
    Warning,
}

impl Default for SemanticColor {
    fn default() -> Self {
        SemanticColor::Dark
    }
}

/// A normal/subtle pair for one semantic color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub normal: Color,
    pub subtle: Color,
}

impl ColorPair {
    pub const fn new(normal: Color, subtle: Color) -> Self {
        Self { normal, subtle }
    }
}

/// The full semantic palette of a rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub dark: ColorPair,
    pub light: ColorPair,
    pub accent: ColorPair,
    pub attention: ColorPair,
    pub good: ColorPair,
    pub warning: ColorPair,
}

impl Palette {
    /// Resolves a semantic color name to its pair.
    pub fn get(&self, color: SemanticColor) -> &ColorPair {
        match color {
            SemanticColor::Dark => &self.dark,
            SemanticColor::Light => &self.light,
            SemanticColor::Accent => &self.accent,
            SemanticColor::Attention => &self.attention,
            SemanticColor::Good => &self.good,
            SemanticColor::Warning => &self.warning,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            dark: ColorPair::new(
                Color::Rgb(0x33, 0x33, 0x33),
                Color::Argb(0xEE, 0x33, 0x33, 0x33),
            ),
            light: ColorPair::new(
                Color::Rgb(0xFF, 0xFF, 0xFF),
                Color::Argb(0x88, 0xFF, 0xFF, 0xFF),
            ),
            accent: ColorPair::new(
                Color::Rgb(0x2E, 0x89, 0xFC),
                Color::Argb(0x88, 0x2E, 0x89, 0xFC),
            ),
            attention: ColorPair::new(
                Color::Rgb(0xFF, 0xD8, 0x00),
                Color::Argb(0xDD, 0xFF, 0xD8, 0x00),
            ),
            good: ColorPair::new(
                Color::Rgb(0x00, 0xFF, 0x00),
                Color::Argb(0xDD, 0x00, 0xFF, 0x00),
            ),
            warning: ColorPair::new(
                Color::Rgb(0xFF, 0x00, 0x00),
                Color::Argb(0xDD, 0xFF, 0x00, 0x00),
            ),
        }
    }
}
