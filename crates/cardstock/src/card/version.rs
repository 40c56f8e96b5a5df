//! Card schema versions.

use std::fmt;
use std::str::FromStr;

use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, Serializer};
use thiserror::Error;

/// Error returned when a version string is not `MAJOR.MINOR`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid schema version '{value}': expected MAJOR.MINOR")]
pub struct ParseVersionError {
    /// The rejected input.
    pub value: String,
}

/// A card schema version, in `major.minor` form.
///
/// Versions are totally ordered (major first), so a host supporting up to
/// some version can gate payloads with a plain comparison.
///
/// # Example
///
/// ```rust
/// use cardstock::SchemaVersion;
///
/// let v12: SchemaVersion = "1.2".parse().unwrap();
/// assert!(SchemaVersion::V1_0 < v12);
/// assert!(!v12.is_supported_by(SchemaVersion::V1_0));
/// assert_eq!(v12.to_string(), "1.2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SchemaVersion {
    pub major: u16,
    pub minor: u16,
}

impl SchemaVersion {
    /// Version 1.0, the baseline every receiver supports.
    pub const V1_0: SchemaVersion = SchemaVersion::new(1, 0);

    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    /// True when a host supporting up to `host` can render this version.
    pub fn is_supported_by(&self, host: SchemaVersion) -> bool {
        *self <= host
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for SchemaVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseVersionError {
            value: s.to_string(),
        };

        let (major, minor) = s.split_once('.').ok_or_else(err)?;
        if !major.bytes().all(|b| b.is_ascii_digit())
            || !minor.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(err());
        }

        Ok(Self {
            major: major.parse().map_err(|_| err())?,
            minor: minor.parse().map_err(|_| err())?,
        })
    }
}

impl Serialize for SchemaVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SchemaVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
