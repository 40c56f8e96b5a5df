//! # Cardstock: Card Payload Provisioning for Adaptive Card Receivers
//!
//! `cardstock` supplies the two documents a card-rendering host needs before
//! any real data exists:
//!
//! - a **host configuration** (fonts, colors, spacing, per-element styles)
//!   that styles whatever card is currently shown, and
//! - a **placeholder payload**, a minimal "Connecting..." card displayed
//!   until the first real payload streams in.
//!
//! The actual renderer, the transport, and the UI shell are external
//! collaborators; this crate only provides, validates, and substitutes the
//! documents they consume.
//!
//! ## Quick Start
//!
//! ```rust
//! use cardstock::{default_host_config, is_placeholder, placeholder, CardPayload};
//!
//! // At startup the host has a valid card and a valid configuration,
//! // before any byte has arrived from the transport.
//! let config = default_host_config();
//! let shown = placeholder();
//! assert!(is_placeholder(&shown));
//!
//! // Real content arrives; the placeholder may be replaced silently.
//! let real = CardPayload::from_json(r#"{
//!     "type": "AdaptiveCard",
//!     "version": "1.0",
//!     "body": [{"type": "TextBlock", "text": "Build finished"}]
//! }"#).unwrap();
//! assert!(!is_placeholder(&real));
//!
//! // The configuration is the styling context for either payload.
//! assert_eq!(config.font_family, "Segoe UI");
//! ```
//!
//! ## Host Configuration
//!
//! The configuration document lives in [`hostconfig`] (re-exported from
//! `cardstock-hostconfig`). Supplied configuration is partial and merges
//! over the defaults:
//!
//! ```rust
//! use cardstock::HostConfig;
//!
//! let config = HostConfig::parse(r#"{"fontFamily": "Arial"}"#).unwrap();
//! assert_eq!(config.font_family, "Arial");
//! assert_eq!(config.font_sizes.normal, 14);
//! ```

pub mod card;
mod error;
pub mod placeholder;
pub mod prelude;

pub use card::{
    CardElement, CardKind, CardPayload, ContainerElement, ParseVersionError, SchemaVersion,
    TextBlockElement,
};
pub use error::{PayloadError, Result};
pub use placeholder::{
    is_placeholder, is_placeholder_json, placeholder, PLACEHOLDER_TEXT, SCHEMA_URL,
};

// Host configuration (re-exported from cardstock-hostconfig)
pub use cardstock_hostconfig as hostconfig;
pub use cardstock_hostconfig::{default_host_config, Color, HostConfig, HostConfigError};
