//! Centralized constants for defaults, environment keys and UA.

use std::time::Duration;

/// UA sent with every request unless overridden.
pub(crate) const USER_AGENT: &str = concat!("statboard-rs/", env!("CARGO_PKG_VERSION"));

/// Overall request ceiling used when the builder is not given one.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Name of the query parameter carrying the API key.
pub(crate) const API_KEY_PARAM: &str = "key";

/// Placeholder written over the key in diagnostics.
pub(crate) const REDACTED: &str = "***";

/// Environment variable holding the backend base URL.
pub const ENV_BASE_URL: &str = "STATBOARD_API_BASE_URL";

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "STATBOARD_API_KEY";

/// Optional environment variable overriding the timeout, in milliseconds.
pub const ENV_TIMEOUT_MS: &str = "STATBOARD_TIMEOUT_MS";
