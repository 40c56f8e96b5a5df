//! Card body elements.
//!
//! Only the element kinds this core actually inspects are modeled as typed
//! variants; anything else a payload may carry is preserved verbatim under
//! [`CardElement::Unknown`] for the renderer to interpret. Text sizes and
//! weights reuse the host configuration vocabularies, since that document is
//! what resolves them at render time.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use cardstock_hostconfig::{TextSize, TextWeight};

/// A single element in a card body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CardElement {
    /// A grouping element holding nested items.
    Container(ContainerElement),
    /// A run of styled text.
    TextBlock(TextBlockElement),
    /// Any element kind this crate does not model, kept as raw JSON.
    #[serde(untagged)]
    Unknown(Value),
}

impl CardElement {
    /// Convenience constructor for a container.
    pub fn container(items: Vec<CardElement>) -> Self {
        CardElement::Container(ContainerElement { items })
    }

    /// Convenience constructor for a plain text block.
    pub fn text_block(text: impl Into<String>) -> Self {
        CardElement::TextBlock(TextBlockElement::new(text))
    }
}

/// A grouping element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerElement {
    #[serde(default)]
    pub items: Vec<CardElement>,
}

/// A run of styled text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlockElement {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<TextWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<TextSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_subtle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
}

impl TextBlockElement {
    /// A text block with no styling overrides.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            weight: None,
            size: None,
            is_subtle: None,
            wrap: None,
        }
    }

    /// Sets the named weight, returning `self` for chaining.
    pub fn weight(mut self, weight: TextWeight) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Sets the named size, returning `self` for chaining.
    pub fn size(mut self, size: TextSize) -> Self {
        self.size = Some(size);
        self
    }
}
