//! The default placeholder card.
//!
//! A receiver shows this card from the moment its surface exists until the
//! first real payload streams in, so the renderer never has to special-case
//! "no data yet". Because the placeholder is a perfectly ordinary card, the
//! host needs a way to tell it apart from real content: a payload that
//! [`is_placeholder`] may be silently replaced when content arrives, while
//! anything else must not be overwritten without the host's say-so.

use once_cell::sync::Lazy;

use cardstock_hostconfig::{TextSize, TextWeight};

use crate::card::{CardElement, CardKind, CardPayload, SchemaVersion, TextBlockElement};

/// Schema URL advertised by the default placeholder card.
pub const SCHEMA_URL: &str = "http://adaptivecards.io/schemas/adaptive-card.json";

/// Text shown by the placeholder card.
pub const PLACEHOLDER_TEXT: &str = "Connecting...";

static PLACEHOLDER: Lazy<CardPayload> = Lazy::new(|| CardPayload {
    schema: Some(SCHEMA_URL.to_string()),
    kind: CardKind::AdaptiveCard,
    version: SchemaVersion::V1_0,
    body: vec![CardElement::container(vec![CardElement::TextBlock(
        TextBlockElement::new(PLACEHOLDER_TEXT)
            .weight(TextWeight::Bolder)
            .size(TextSize::Medium),
    )])],
});

/// Returns an owned copy of the placeholder card shown before content
/// arrives. Every call returns a value-equal document.
pub fn placeholder() -> CardPayload {
    PLACEHOLDER.clone()
}

/// True when `payload` is structurally identical to the placeholder card.
pub fn is_placeholder(payload: &CardPayload) -> bool {
    *payload == *PLACEHOLDER
}

/// Lenient form of [`is_placeholder`] for raw payload text.
///
/// Malformed input is not an error at this boundary; whatever it is, it is
/// not the placeholder.
pub fn is_placeholder_json(text: &str) -> bool {
    CardPayload::from_json(text)
        .map(|payload| is_placeholder(&payload))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_placeholder() {
        assert!(is_placeholder(&placeholder()));
        assert!(placeholder().is_placeholder());
    }

    #[test]
    fn test_placeholder_is_deterministic() {
        assert_eq!(placeholder(), placeholder());
    }

    #[test]
    fn test_copies_are_independent() {
        let mut mine = placeholder();
        mine.body.clear();
        assert!(is_placeholder(&placeholder()));
    }

    #[test]
    fn test_malformed_text_is_simply_not_the_placeholder() {
        assert!(!is_placeholder_json("{nope"));
        assert!(!is_placeholder_json(""));
        assert!(!is_placeholder_json("[]"));
        assert!(!is_placeholder_json(r#"{"type": "AdaptiveCard"}"#));
    }

    #[test]
    fn test_placeholder_text_roundtrips() {
        let text = placeholder().to_json().unwrap();
        assert!(is_placeholder_json(&text));
    }
}
