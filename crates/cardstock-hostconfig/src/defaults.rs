//! Compiled-in default documents.
//!
//! The default host configuration is constructed once, lazily, and lives for
//! the process lifetime. Accessors hand out owned copies, so no caller ever
//! holds a reference into shared mutable state.

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::config::HostConfig;

static DEFAULT: Lazy<HostConfig> = Lazy::new(HostConfig::default);

static DEFAULT_VALUE: Lazy<Value> = Lazy::new(|| {
    serde_json::to_value(&*DEFAULT).expect("default host configuration serializes to JSON")
});

/// Returns an owned copy of the built-in default host configuration.
///
/// Every call returns a value-equal document; callers may freely mutate
/// their copy without affecting anyone else's.
pub fn default_host_config() -> HostConfig {
    DEFAULT.clone()
}

/// The default document in JSON value form, as the base for merges.
pub(crate) fn default_value() -> &'static Value {
    &DEFAULT_VALUE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessor_is_deterministic() {
        assert_eq!(default_host_config(), default_host_config());
        assert_eq!(default_host_config(), HostConfig::default());
    }

    #[test]
    fn test_copies_are_independent() {
        let mut mine = default_host_config();
        mine.font_family = "Comic Sans MS".to_string();
        assert_eq!(default_host_config().font_family, "Segoe UI");
    }

    #[test]
    fn test_value_form_matches_document() {
        let value = default_value();
        let roundtrip: HostConfig = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(roundtrip, default_host_config());
    }
}
