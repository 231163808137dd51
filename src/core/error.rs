use thiserror::Error;
use url::Url;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum StatError {
    /// The request never produced a response (DNS, refused connection, reset, TLS...).
    #[error("network error at {url}: {source}")]
    Network {
        /// The endpoint that was requested, without the query string.
        url: Url,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The request did not settle within the configured timeout.
    #[error("request to {url} timed out: {source}")]
    Timeout {
        /// The endpoint that was requested, without the query string.
        url: Url,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success HTTP status code.
    #[error("unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The endpoint that returned the error, without the query string.
        url: Url,
        /// The response body as received, possibly empty.
        body: String,
    },

    /// The client configuration is incomplete or invalid.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A provided URL could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A response body could not be decoded as JSON.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// The three ways a request can fail once it has been issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// No response was received.
    Network,
    /// The deadline was exceeded.
    Timeout,
    /// A response arrived with a failure status.
    Status,
}

impl StatError {
    /// Classify a transport error raised while a request was in flight.
    pub(crate) fn from_transport(source: reqwest::Error, url: Url) -> Self {
        if source.is_timeout() {
            Self::Timeout { url, source }
        } else {
            Self::Network { url, source }
        }
    }

    /// The request failure kind, or `None` for construction and decoding errors.
    #[must_use]
    pub const fn kind(&self) -> Option<FailureKind> {
        match self {
            Self::Network { .. } => Some(FailureKind::Network),
            Self::Timeout { .. } => Some(FailureKind::Timeout),
            Self::Status { .. } => Some(FailureKind::Status),
            _ => None,
        }
    }

    /// The HTTP status, when a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The endpoint involved in a request failure.
    #[must_use]
    pub const fn url(&self) -> Option<&Url> {
        match self {
            Self::Network { url, .. } | Self::Timeout { url, .. } | Self::Status { url, .. } => {
                Some(url)
            }
            _ => None,
        }
    }
}
