//! # Cardstock Host Configuration
//!
//! `cardstock-hostconfig` models the host configuration document a
//! card-rendering surface applies when drawing Adaptive Cards: fonts, the
//! semantic color palette, spacing, per-element styles, and action layout.
//!
//! This crate is the configuration foundation for the `cardstock` receiver
//! library, but stands on its own for any host that renders cards.
//!
//! ## Core Concepts
//!
//! - [`HostConfig`]: the typed configuration document, with compiled-in
//!   defaults matching the stock receiver surface
//! - [`HostConfig::parse`]: the single deserialization boundary where supplied
//!   text is validated and deep-merged over the defaults
//! - [`merge::deep_merge`]: the override-wins document merge rule
//! - [`Color`]: strict `#RRGGBB` / `#AARRGGBB` color values
//!
//! ## Quick Start
//!
//! ```rust
//! use cardstock_hostconfig::{default_host_config, HostConfig};
//!
//! // The built-in defaults are always available and cannot fail.
//! let defaults = default_host_config();
//! assert_eq!(defaults.font_family, "Segoe UI");
//!
//! // Supplied configuration is partial: touched leaves win, everything
//! // else falls back to the defaults.
//! let config = HostConfig::parse(r##"{
//!     "fontFamily": "Arial",
//!     "colors": { "accent": { "normal": "#0063B1" } }
//! }"##).unwrap();
//!
//! assert_eq!(config.font_family, "Arial");
//! assert_eq!(config.colors.accent.normal.to_string(), "#0063B1");
//! assert_eq!(config.font_sizes, defaults.font_sizes);
//! ```
//!
//! ## Failure Model
//!
//! `parse` never falls back silently: malformed text or an invalid field is
//! a [`HostConfigError`] for the host to report. The defaults remain
//! available as a known-good document the host may choose afterwards.
//!
//! ```rust
//! use cardstock_hostconfig::HostConfig;
//!
//! let result = HostConfig::parse(r#"{"colors": {"dark": {"normal": "notacolor"}}}"#);
//! assert!(result.is_err());
//! ```

pub mod color;
pub mod config;
mod defaults;
mod error;
pub mod merge;

pub use color::{Color, ParseColorError};
pub use config::{
    ActionAlignment, ActionsConfig, AdaptiveCardConfig, ColorPair, ColumnConfig, ColumnSetConfig,
    ContainerConfig, ContainerStyle, FactSetConfig, FontSizes, FontWeights, HostConfig,
    ImageConfig, ImageSetConfig, ImageSize, ImageSizes, InputConfig, Insets, Orientation,
    Palette, SemanticColor, Separation, ShowCardConfig, ShowCardMode, TextBlockConfig,
    TextBlockSeparations, TextSize, TextStyle, TextWeight,
};
pub use defaults::default_host_config;
pub use error::{HostConfigError, Result};
pub use merge::deep_merge;
