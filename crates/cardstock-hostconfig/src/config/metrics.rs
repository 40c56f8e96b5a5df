//! Shared spacing and sizing primitives.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Four-sided insets, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Insets {
    /// Equal insets on all four sides.
    pub const fn uniform(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// Spacing between an element and the element above it, with an optional
/// separator line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Separation {
    pub spacing: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_thickness: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_color: Option<Color>,
}

impl Separation {
    /// A separation that only spaces, without a visible line.
    pub const fn spacing_only(spacing: u32) -> Self {
        Self {
            spacing,
            line_thickness: None,
            line_color: None,
        }
    }

    /// True when the separation draws a separator line.
    pub fn has_line(&self) -> bool {
        self.line_thickness.is_some()
    }
}

impl Default for Separation {
    fn default() -> Self {
        Self::spacing_only(20)
    }
}

/// Named image size used by element style documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageSize {
    Small,
    Medium,
    Large,
}

impl Default for ImageSize {
    fn default() -> Self {
        ImageSize::Medium
    }
}

/// Pixel dimensions behind the named image sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSizes {
    pub small: u32,
    pub medium: u32,
    pub large: u32,
}

impl ImageSizes {
    /// Resolves a named size to pixels.
    pub fn pixels(&self, size: ImageSize) -> u32 {
        match size {
            ImageSize::Small => self.small,
            ImageSize::Medium => self.medium,
            ImageSize::Large => self.large,
        }
    }
}

impl Default for ImageSizes {
    fn default() -> Self {
        Self {
            small: 40,
            medium: 80,
            large: 160,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_insets() {
        let insets = Insets::uniform(16);
        assert_eq!(insets.top, 16);
        assert_eq!(insets.right, 16);
        assert_eq!(insets.bottom, 16);
        assert_eq!(insets.left, 16);
    }

    #[test]
    fn test_separation_default_has_no_line() {
        let sep = Separation::default();
        assert_eq!(sep.spacing, 20);
        assert!(!sep.has_line());
    }

    #[test]
    fn test_spacing_only_separation_omits_line_fields() {
        let json = serde_json::to_value(Separation::spacing_only(20)).unwrap();
        assert_eq!(json, serde_json::json!({"spacing": 20}));
    }

    #[test]
    fn test_image_size_tokens() {
        assert_eq!(
            serde_json::to_value(ImageSize::Medium).unwrap(),
            serde_json::json!("medium")
        );
        assert_eq!(
            serde_json::from_str::<ImageSize>("\"large\"").unwrap(),
            ImageSize::Large
        );
    }

    #[test]
    fn test_image_sizes_resolution() {
        let sizes = ImageSizes::default();
        assert_eq!(sizes.pixels(ImageSize::Small), 40);
        assert_eq!(sizes.pixels(ImageSize::Medium), 80);
        assert_eq!(sizes.pixels(ImageSize::Large), 160);
    }

    #[test]
    fn test_negative_spacing_is_a_type_error() {
        assert!(serde_json::from_str::<Separation>("{\"spacing\": -1}").is_err());
    }
}
