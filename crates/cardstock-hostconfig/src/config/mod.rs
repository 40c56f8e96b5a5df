//! The host configuration document.
//!
//! A `HostConfig` describes the presentation defaults a card-rendering
//! surface applies when drawing a card: fonts, the semantic color palette,
//! spacing, per-element styles, and action layout. The host owns it; card
//! payloads only name sizes, weights, and colors that this document resolves.
//!
//! # Resolution Model
//!
//! Supplied configuration is always **partial**: the resolved document is a
//! deep merge of the built-in defaults and the supplied text, with supplied
//! values winning at every leaf they touch. There is no silent fallback: a
//! malformed document is an error, never quietly replaced by defaults.
//!
//! ```rust
//! use cardstock_hostconfig::HostConfig;
//!
//! let config = HostConfig::parse(r##"{
//!     "fontFamily": "Arial",
//!     "colors": { "dark": { "normal": "#000000" } }
//! }"##).unwrap();
//!
//! // Supplied leaves win...
//! assert_eq!(config.font_family, "Arial");
//! assert_eq!(config.colors.dark.normal.to_string(), "#000000");
//! // ...and untouched leaves keep their defaults.
//! assert_eq!(config.colors.dark.subtle.to_string(), "#EE333333");
//! assert_eq!(config.font_sizes.normal, 14);
//! ```
//!
//! # Validation
//!
//! Validation happens at the deserialization boundary, by construction:
//! colors must parse as [`Color`](crate::color::Color), sizes and spacings
//! are unsigned, and enumerated fields are closed vocabularies. Unknown
//! fields are ignored for forward compatibility.

mod actions;
mod elements;
mod metrics;
mod palette;
mod typography;

pub use actions::{ActionAlignment, ActionsConfig, Orientation, ShowCardConfig, ShowCardMode};
pub use elements::{
    AdaptiveCardConfig, ColumnConfig, ColumnSetConfig, ContainerConfig, ContainerStyle,
    FactSetConfig, ImageConfig, ImageSetConfig, InputConfig, TextBlockConfig,
    TextBlockSeparations,
};
pub use metrics::{ImageSize, ImageSizes, Insets, Separation};
pub use palette::{ColorPair, Palette, SemanticColor};
pub use typography::{FontSizes, FontWeights, TextSize, TextStyle, TextWeight};

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::Color;
use crate::defaults;
use crate::error::{HostConfigError, Result};
use crate::merge::deep_merge;

/// Presentation defaults for a card-rendering surface.
///
/// Construct one with [`HostConfig::default`] (the built-in document),
/// [`HostConfig::parse`] (defaults plus a supplied override document), or
/// [`HostConfig::merge`] (layer a further overlay over an existing
/// configuration). Instances are plain data: cloning is cheap enough and no
/// method mutates a document after it has been handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostConfig {
    /// Whether the surface renders inputs and actions at all.
    pub supports_interactivity: bool,
    /// Separation used when an element asks for strong separation.
    pub strong_separation: Separation,
    pub font_family: String,
    pub font_sizes: FontSizes,
    pub font_weights: FontWeights,
    pub colors: Palette,
    pub image_sizes: ImageSizes,
    pub actions: ActionsConfig,
    pub adaptive_card: AdaptiveCardConfig,
    pub container: ContainerConfig,
    pub text_block: TextBlockConfig,
    pub image: ImageConfig,
    pub image_set: ImageSetConfig,
    pub fact_set: FactSetConfig,
    pub input: InputConfig,
    pub column_set: ColumnSetConfig,
    pub column: ColumnConfig,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            supports_interactivity: true,
            strong_separation: Separation {
                spacing: 40,
                line_thickness: Some(1),
                line_color: Some(Color::Rgb(0xEE, 0xEE, 0xEE)),
            },
            font_family: "Segoe UI".to_string(),
            font_sizes: FontSizes::default(),
            font_weights: FontWeights::default(),
            colors: Palette::default(),
            image_sizes: ImageSizes::default(),
            actions: ActionsConfig::default(),
            adaptive_card: AdaptiveCardConfig::default(),
            container: ContainerConfig::default(),
            text_block: TextBlockConfig::default(),
            image: ImageConfig::default(),
            image_set: ImageSetConfig::default(),
            fact_set: FactSetConfig::default(),
            input: InputConfig::default(),
            column_set: ColumnSetConfig::default(),
            column: ColumnConfig::default(),
        }
    }
}

impl HostConfig {
    /// Parses supplied JSON configuration text over the built-in defaults.
    ///
    /// The supplied document may specify any subset of fields; the result is
    /// `defaults ⊕ supplied` with supplied leaves taking precedence. Unknown
    /// fields are ignored.
    ///
    /// # Errors
    ///
    /// [`HostConfigError::Parse`] when the text is not well-formed JSON, and
    /// [`HostConfigError::Invalid`] when a field has an incompatible type or
    /// value (bad color, negative size, unknown enumeration token).
    pub fn parse(text: &str) -> Result<Self> {
        let supplied: Value = serde_json::from_str(text).map_err(|e| HostConfigError::Parse {
            message: e.to_string(),
        })?;
        Self::resolve(supplied)
    }

    /// [`parse`](Self::parse) for YAML-delivered configuration text.
    pub fn parse_yaml(text: &str) -> Result<Self> {
        let supplied: Value = serde_yaml::from_str(text).map_err(|e| HostConfigError::Parse {
            message: e.to_string(),
        })?;
        Self::resolve(supplied)
    }

    /// Loads configuration from a file, dispatching on extension.
    ///
    /// `.yaml` and `.yml` files go through [`parse_yaml`](Self::parse_yaml);
    /// everything else is treated as JSON. This is a convenience for
    /// loaders; the `parse` boundary itself never touches the filesystem.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| HostConfigError::Load {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        if is_yaml {
            Self::parse_yaml(&text)
        } else {
            Self::parse(&text)
        }
    }

    /// Merges a partial overlay document over this configuration.
    ///
    /// Objects merge key-by-key; arrays and scalar leaves from the overlay
    /// replace wholesale. `self` is left untouched; the merged document is
    /// returned as a new configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cardstock_hostconfig::HostConfig;
    /// use serde_json::json;
    ///
    /// let base = HostConfig::default();
    /// let merged = base.merge(&json!({"actions": {"maxActions": 3}})).unwrap();
    ///
    /// assert_eq!(merged.actions.max_actions, 3);
    /// assert_eq!(merged.actions.button_spacing, base.actions.button_spacing);
    /// ```
    pub fn merge(&self, overlay: &Value) -> Result<Self> {
        let mut doc = self.to_value()?;
        deep_merge(&mut doc, overlay);
        serde_json::from_value(doc).map_err(|e| HostConfigError::Invalid {
            message: e.to_string(),
        })
    }

    /// Canonical JSON value form of this configuration.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| HostConfigError::Invalid {
            message: e.to_string(),
        })
    }

    fn resolve(supplied: Value) -> Result<Self> {
        if !supplied.is_object() {
            return Err(HostConfigError::invalid(
                "host configuration must be a JSON object",
            ));
        }

        let mut doc = defaults::default_value().clone();
        deep_merge(&mut doc, &supplied);
        serde_json::from_value(doc).map_err(|e| HostConfigError::Invalid {
            message: e.to_string(),
        })
    }
}
