//! Convenient imports for embedding hosts.
//!
//! ```rust
//! use cardstock::prelude::*;
//!
//! let config = default_host_config();
//! let card = placeholder();
//! assert!(is_placeholder(&card));
//! assert_eq!(config.font_sizes.normal, 14);
//! ```

pub use crate::card::{CardElement, CardPayload, SchemaVersion};
pub use crate::error::PayloadError;
pub use crate::placeholder::{is_placeholder, placeholder};

pub use cardstock_hostconfig::{default_host_config, HostConfig, HostConfigError};
