//! Property-based tests for the merge rule and color parsing.

use cardstock_hostconfig::merge::{deep_merge, merged};
use cardstock_hostconfig::Color;
use proptest::prelude::*;
use serde_json::Value;

// ============================================================================
// Strategies
// ============================================================================

fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<u32>().prop_map(Value::from),
        "[a-z#0-9]{0,8}".prop_map(Value::from),
    ]
}

/// Arbitrary JSON documents, a few levels deep.
fn value_strategy() -> impl Strategy<Value = Value> {
    leaf_strategy().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Arbitrary JSON objects (the only valid overlay shape at the top level).
fn object_strategy() -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[a-z]{1,6}", value_strategy(), 0..6)
        .prop_map(|m| Value::Object(m.into_iter().collect()))
}

// ============================================================================
// Merge properties
// ============================================================================

proptest! {
    /// Merging the empty overlay changes nothing.
    #[test]
    fn empty_overlay_is_identity(base in object_strategy()) {
        let mut doc = base.clone();
        deep_merge(&mut doc, &Value::Object(Default::default()));
        prop_assert_eq!(doc, base);
    }

    /// Applying the same overlay twice equals applying it once.
    #[test]
    fn merge_is_idempotent(base in object_strategy(), overlay in object_strategy()) {
        let once = merged(&base, &overlay);
        let twice = merged(&once, &overlay);
        prop_assert_eq!(once, twice);
    }

    /// Every non-object overlay leaf is present verbatim in the result.
    #[test]
    fn overlay_leaves_win(base in object_strategy(), overlay in object_strategy()) {
        let result = merged(&base, &overlay);
        let result_map = result.as_object().unwrap();
        for (key, overlay_value) in overlay.as_object().unwrap() {
            if !overlay_value.is_object() {
                prop_assert_eq!(&result_map[key], overlay_value);
            }
        }
    }

    /// Keys absent from the overlay keep their base value.
    #[test]
    fn untouched_keys_keep_base_values(base in object_strategy(), overlay in object_strategy()) {
        let result = merged(&base, &overlay);
        let result_map = result.as_object().unwrap();
        let overlay_map = overlay.as_object().unwrap();
        for (key, base_value) in base.as_object().unwrap() {
            if !overlay_map.contains_key(key) {
                prop_assert_eq!(&result_map[key], base_value);
            }
        }
    }
}

// ============================================================================
// Color properties
// ============================================================================

proptest! {
    /// Display and parse are inverse for the RGB form.
    #[test]
    fn rgb_roundtrip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let color = Color::Rgb(r, g, b);
        prop_assert_eq!(Color::parse(&color.to_string()).unwrap(), color);
    }

    /// Display and parse are inverse for the ARGB form.
    #[test]
    fn argb_roundtrip(a in any::<u8>(), r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let color = Color::Argb(a, r, g, b);
        prop_assert_eq!(Color::parse(&color.to_string()).unwrap(), color);
    }

    /// Parsing never panics, whatever the input.
    #[test]
    fn parse_never_panics(input in ".{0,16}") {
        let _ = Color::parse(&input);
    }
}
