//! Per-element style documents.
//!
//! Each card element kind gets its own small style sub-document. Most only
//! carry a separation; the interesting ones are the card surface itself, the
//! two container styles, and the fact-set text styles.

use serde::{Deserialize, Serialize};

use crate::color::Color;

use super::metrics::{ImageSize, Insets, Separation};
use super::palette::SemanticColor;
use super::typography::{TextStyle, TextWeight};

/// Styling of the card surface itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveCardConfig {
    pub background_color: Color,
    pub padding: Insets,
}

impl Default for AdaptiveCardConfig {
    fn default() -> Self {
        Self {
            // Fully transparent: the embedding surface shows through.
            background_color: Color::Argb(0x00, 0x00, 0x00, 0x00),
            padding: Insets::uniform(20),
        }
    }
}

/// One container style. All fields optional; the default `normal` style is
/// the empty document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_thickness: Option<Insets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Insets>,
}

/// Container configuration: separation plus the normal/emphasis styles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerConfig {
    pub separation: Separation,
    pub normal: ContainerStyle,
    pub emphasis: ContainerStyle,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            separation: Separation::spacing_only(20),
            normal: ContainerStyle::default(),
            emphasis: ContainerStyle {
                background_color: Some(Color::Rgb(0xEE, 0xEE, 0xEE)),
                border_color: Some(Color::Rgb(0xAA, 0xAA, 0xAA)),
                border_thickness: Some(Insets::uniform(1)),
                padding: Some(Insets::uniform(10)),
            },
        }
    }
}

/// Separations for text blocks, one per named text size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlockSeparations {
    pub small: Separation,
    pub normal: Separation,
    pub medium: Separation,
    pub large: Separation,
    pub extra_large: Separation,
}

impl Default for TextBlockSeparations {
    fn default() -> Self {
        Self {
            small: Separation::spacing_only(20),
            normal: Separation::spacing_only(20),
            medium: Separation::spacing_only(20),
            large: Separation::spacing_only(20),
            extra_large: Separation::spacing_only(20),
        }
    }
}

/// Text block configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlockConfig {
    pub color: SemanticColor,
    pub separations: TextBlockSeparations,
}

/// Image configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    pub size: ImageSize,
    pub separation: Separation,
}

/// Image set configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSetConfig {
    pub image_size: ImageSize,
    pub separation: Separation,
}

/// Fact set configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactSetConfig {
    pub separation: Separation,
    pub title: TextStyle,
    pub value: TextStyle,
    /// Gap between the title and value columns.
    pub spacing: u32,
}

impl Default for FactSetConfig {
    fn default() -> Self {
        Self {
            separation: Separation::spacing_only(20),
            title: TextStyle {
                weight: TextWeight::Bolder,
                max_width: Some(150),
                ..TextStyle::default()
            },
            value: TextStyle::default(),
            spacing: 10,
        }
    }
}

/// Input element configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputConfig {
    pub separation: Separation,
}

/// Column set configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSetConfig {
    pub separation: Separation,
}

/// Column configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnConfig {
    pub separation: Separation,
}
