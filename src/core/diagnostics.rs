//! Failure diagnostics and the observer hook they are delivered to.

use std::fmt;

use reqwest::Method;
use url::Url;

use crate::core::models::ApiResponse;

/// The structured record emitted once for every failed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The requested endpoint, without the query string.
    pub url: Url,
    /// The HTTP method of the request.
    pub method: Method,
    /// The query parameters that were sent, with the API key redacted.
    pub params: Vec<(String, String)>,
    /// Human-readable error message.
    pub message: String,
    /// Response status, if a response was received.
    pub status: Option<u16>,
    /// Response body, if a non-empty one was received.
    pub data: Option<String>,
}

impl Diagnostic {
    /// Looks up a logged query parameter by name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Receives what the client observes: failures and fetched payloads.
///
/// Observers are side-effect only. They cannot alter or swallow the outcome of a
/// request; the caller always gets the original result back.
pub trait Observer: fmt::Debug + Send + Sync {
    /// Called exactly once for every failed request, before the error is returned.
    fn on_failure(&self, diagnostic: &Diagnostic);

    /// Called with every response a resource fetcher returns.
    fn on_payload(&self, resource: &str, response: &ApiResponse) {
        tracing::debug!(
            target: "statboard::resources",
            resource,
            status = response.status,
            body = %response.body,
            "API response"
        );
    }
}

/// Default observer: forwards everything to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_failure(&self, d: &Diagnostic) {
        tracing::error!(
            target: "statboard::client",
            url = %d.url,
            method = %d.method,
            params = ?d.params,
            message = %d.message,
            status = ?d.status,
            data = ?d.data,
            "API error"
        );
    }
}
