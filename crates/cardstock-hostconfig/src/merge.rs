//! Deep merge for host configuration documents.
//!
//! The merge rule is the one the rest of the crate is built on: objects merge
//! recursively key-by-key, while arrays and scalar leaves from the overlay
//! replace the base value wholesale. An explicit `null` in the overlay is a
//! leaf like any other: it replaces, which clears optional fields and fails
//! required ones at validation time.
//!
//! # Example
//!
//! ```rust
//! use cardstock_hostconfig::merge::deep_merge;
//! use serde_json::json;
//!
//! let mut base = json!({"colors": {"dark": {"normal": "#333333", "subtle": "#EE333333"}}});
//! deep_merge(&mut base, &json!({"colors": {"dark": {"normal": "#000000"}}}));
//!
//! assert_eq!(base["colors"]["dark"]["normal"], "#000000");
//! assert_eq!(base["colors"]["dark"]["subtle"], "#EE333333");
//! ```

use serde_json::Value;

/// Merges `overlay` into `base` in place.
///
/// Keys present only in `overlay` are inserted; keys present in both recurse
/// when both sides are objects and are replaced by the overlay value
/// otherwise. The merge is deterministic and idempotent: applying the same
/// overlay twice yields the same document as applying it once.
pub fn deep_merge(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => {
                        base_map.insert(key.clone(), overlay_value.clone());
                    }
                }
            }
        }
        (base, overlay) => *base = overlay.clone(),
    }
}

/// Returns `base` with `overlay` merged over it, leaving both inputs intact.
pub fn merged(base: &Value, overlay: &Value) -> Value {
    let mut result = base.clone();
    deep_merge(&mut result, overlay);
    result
}
