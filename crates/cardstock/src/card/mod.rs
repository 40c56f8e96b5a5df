//! Card payload documents.
//!
//! A [`CardPayload`] is the unit the transport delivers to a receiver: a
//! `type` tag (always `AdaptiveCard`), the schema version it targets, and an
//! ordered body of elements. The payload carries *content*; all styling
//! comes from the host configuration it is rendered under.
//!
//! An empty body is a valid document: it is the "no content yet" state,
//! distinct from the placeholder card (see [`crate::placeholder`]).

mod element;
mod version;

pub use element::{CardElement, ContainerElement, TextBlockElement};
pub use version::{ParseVersionError, SchemaVersion};

use serde::{Deserialize, Serialize};

use crate::error::{PayloadError, Result};

/// Document type tag. There is exactly one card document type this host
/// renders, so the tag doubles as validation: anything else fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    AdaptiveCard,
}

/// A card document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPayload {
    /// Schema URL advertised by the payload, if any.
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Document type tag; always `AdaptiveCard`.
    #[serde(rename = "type")]
    pub kind: CardKind,
    /// Schema version the payload targets.
    pub version: SchemaVersion,
    /// Ordered top-level elements. May be empty ("no content yet").
    #[serde(default)]
    pub body: Vec<CardElement>,
}

impl CardPayload {
    /// A payload with the given version and body, without a schema URL.
    pub fn new(version: SchemaVersion, body: Vec<CardElement>) -> Self {
        Self {
            schema: None,
            kind: CardKind::AdaptiveCard,
            version,
            body,
        }
    }

    /// Parses a card payload from JSON text.
    ///
    /// # Errors
    ///
    /// [`PayloadError::Parse`] when the text is not a well-formed card
    /// document (bad JSON, wrong `type` tag, missing or invalid `version`).
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| PayloadError::Parse {
            message: e.to_string(),
        })
    }

    /// Serializes this payload to JSON text.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| PayloadError::Serialize {
            message: e.to_string(),
        })
    }

    /// True when the body has at least one element.
    pub fn has_content(&self) -> bool {
        !self.body.is_empty()
    }

    /// True when this payload is structurally identical to the default
    /// placeholder card.
    pub fn is_placeholder(&self) -> bool {
        crate::placeholder::is_placeholder(self)
    }

    /// Checks that a host supporting up to `host` can render this payload.
    ///
    /// # Errors
    ///
    /// [`PayloadError::UnsupportedVersion`] when the payload targets a newer
    /// schema version than `host`.
    pub fn ensure_supported(&self, host: SchemaVersion) -> Result<()> {
        if self.version.is_supported_by(host) {
            Ok(())
        } else {
            Err(PayloadError::UnsupportedVersion {
                version: self.version,
                supported: host,
            })
        }
    }
}
