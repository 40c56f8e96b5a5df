//! Placeholder provisioning behavior, end to end.

use cardstock::{
    default_host_config, is_placeholder, is_placeholder_json, placeholder, CardElement,
    CardPayload, PayloadError, SchemaVersion, PLACEHOLDER_TEXT, SCHEMA_URL,
};
use cardstock::hostconfig::{TextSize, TextWeight};

// ============================================================================
// Placeholder shape
// ============================================================================

#[test]
fn placeholder_has_the_expected_shape() {
    let card = placeholder();

    assert_eq!(card.schema.as_deref(), Some(SCHEMA_URL));
    assert_eq!(card.version, SchemaVersion::V1_0);
    assert_eq!(card.body.len(), 1);

    let container = match &card.body[0] {
        CardElement::Container(container) => container,
        other => panic!("expected Container, got {:?}", other),
    };
    assert_eq!(container.items.len(), 1);

    let text = match &container.items[0] {
        CardElement::TextBlock(text) => text,
        other => panic!("expected TextBlock, got {:?}", other),
    };
    assert_eq!(text.text, PLACEHOLDER_TEXT);
    assert_eq!(text.text, "Connecting...");
    assert_eq!(text.weight, Some(TextWeight::Bolder));
    assert_eq!(text.size, Some(TextSize::Medium));
}

#[test]
fn placeholder_is_a_valid_supported_payload() {
    let card = placeholder();
    assert!(card.has_content());
    assert!(card.ensure_supported(SchemaVersion::V1_0).is_ok());

    // It survives its own wire form.
    let text = card.to_json().unwrap();
    assert_eq!(CardPayload::from_json(&text).unwrap(), card);
}

// ============================================================================
// Placeholder detection
// ============================================================================

#[test]
fn default_placeholder_is_detected() {
    assert!(is_placeholder(&placeholder()));
}

#[test]
fn empty_body_card_is_not_the_placeholder() {
    // Valid, but a distinct "no content yet" state the renderer handles
    // separately.
    let card =
        CardPayload::from_json(r#"{"type": "AdaptiveCard", "version": "1.0", "body": []}"#)
            .unwrap();
    assert!(!card.has_content());
    assert!(!is_placeholder(&card));
}

#[test]
fn real_content_is_not_the_placeholder() {
    let card = CardPayload::from_json(
        r#"{
            "type": "AdaptiveCard",
            "version": "1.0",
            "body": [
                {"type": "TextBlock", "text": "Build finished", "weight": "bolder"},
                {"type": "Image", "url": "https://example.com/ok.png"}
            ]
        }"#,
    )
    .unwrap();
    assert!(card.has_content());
    assert!(!is_placeholder(&card));
}

#[test]
fn near_miss_text_is_not_the_placeholder() {
    // Same structure, different text.
    let mut card = placeholder();
    if let CardElement::Container(container) = &mut card.body[0] {
        if let CardElement::TextBlock(text) = &mut container.items[0] {
            text.text = "Reconnecting...".to_string();
        }
    }
    assert!(!is_placeholder(&card));
}

#[test]
fn malformed_payload_text_is_false_not_an_error() {
    assert!(!is_placeholder_json("{definitely not json"));
    assert!(!is_placeholder_json(r#"{"type": "HeroCard", "version": "1.0"}"#));
    assert!(is_placeholder_json(&placeholder().to_json().unwrap()));
}

// ============================================================================
// Version gating
// ============================================================================

#[test]
fn newer_payloads_are_gated() {
    let card =
        CardPayload::from_json(r#"{"type": "AdaptiveCard", "version": "1.3"}"#).unwrap();

    match card.ensure_supported(SchemaVersion::V1_0) {
        Err(PayloadError::UnsupportedVersion { version, supported }) => {
            assert_eq!(version, SchemaVersion::new(1, 3));
            assert_eq!(supported, SchemaVersion::V1_0);
        }
        other => panic!("expected UnsupportedVersion, got {:?}", other),
    }
}

// ============================================================================
// Styling context
// ============================================================================

#[test]
fn host_config_styles_the_placeholder() {
    let config = default_host_config();
    let card = placeholder();

    // The placeholder names a size and weight; the configuration decides
    // what they mean on this surface.
    let text = match &card.body[0] {
        CardElement::Container(container) => match &container.items[0] {
            CardElement::TextBlock(text) => text.clone(),
            other => panic!("expected TextBlock, got {:?}", other),
        },
        other => panic!("expected Container, got {:?}", other),
    };

    let size = text.size.unwrap_or_default();
    let weight = text.weight.unwrap_or_default();
    assert_eq!(config.font_sizes.pixels(size), 17);
    assert_eq!(config.font_weights.weight(weight), 600);

    // An overridden configuration restyles the same payload untouched.
    let config = cardstock::HostConfig::parse(r#"{"fontSizes": {"medium": 34}}"#).unwrap();
    assert_eq!(config.font_sizes.pixels(size), 34);
    assert!(is_placeholder(&card));
}
