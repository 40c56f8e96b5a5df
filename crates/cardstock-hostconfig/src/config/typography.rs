//! Font tables and text vocabularies.
//!
//! Text in a card never carries raw pixel sizes or numeric weights; it names
//! a size (`small`..`extraLarge`) or weight (`lighter|normal|bolder`) and the
//! host configuration's font tables decide what those names mean on this
//! surface.

use serde::{Deserialize, Serialize};

use super::palette::SemanticColor;

/// Named text size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextSize {
    Small,
    Normal,
    Medium,
    Large,
    ExtraLarge,
}

impl Default for TextSize {
    fn default() -> Self {
        TextSize::Normal
    }
}

/// Named text weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextWeight {
    Lighter,
    Normal,
    Bolder,
}

impl Default for TextWeight {
    fn default() -> Self {
        TextWeight::Normal
    }
}

/// Pixel sizes behind the named text sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSizes {
    pub small: u32,
    pub normal: u32,
    pub medium: u32,
    pub large: u32,
    pub extra_large: u32,
}

impl FontSizes {
    /// Resolves a named size to pixels.
    pub fn pixels(&self, size: TextSize) -> u32 {
        match size {
            TextSize::Small => self.small,
            TextSize::Normal => self.normal,
            TextSize::Medium => self.medium,
            TextSize::Large => self.large,
            TextSize::ExtraLarge => self.extra_large,
        }
    }
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            small: 12,
            normal: 14,
            medium: 17,
            large: 21,
            extra_large: 26,
        }
    }
}

/// Numeric weights behind the named text weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontWeights {
    pub lighter: u16,
    pub normal: u16,
    pub bolder: u16,
}

impl FontWeights {
    /// Resolves a named weight to its numeric value.
    pub fn weight(&self, weight: TextWeight) -> u16 {
        match weight {
            TextWeight::Lighter => self.lighter,
            TextWeight::Normal => self.normal,
            TextWeight::Bolder => self.bolder,
        }
    }
}

impl Default for FontWeights {
    fn default() -> Self {
        Self {
            lighter: 200,
            normal: 400,
            bolder: 600,
        }
    }
}

/// Text styling for fact-set titles and values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub color: SemanticColor,
    pub size: TextSize,
    pub is_subtle: bool,
    pub weight: TextWeight,
    pub wrap: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u32>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: SemanticColor::Dark,
            size: TextSize::Normal,
            is_subtle: false,
            weight: TextWeight::Normal,
            wrap: true,
            max_width: None,
        }
    }
}
