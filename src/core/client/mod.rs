//! Public client surface + builder.
//! Defaults and environment keys live in `constants`.

pub(crate) mod constants;

use std::env;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method};
use url::Url;

use crate::core::{
    StatError,
    diagnostics::{Diagnostic, Observer, TracingObserver},
    models::ApiResponse,
    net,
};
use constants::{DEFAULT_TIMEOUT, ENV_API_KEY, ENV_BASE_URL, ENV_TIMEOUT_MS, USER_AGENT};

/// A configured client for one statistics backend.
///
/// Every request made through it carries the API key as the `key` query
/// parameter, and every failed request is reported once to the observer before
/// the error is returned. Cloning is cheap and clones share the same
/// connection pool and configuration.
#[derive(Clone)]
pub struct StatClient {
    http: Client,
    base_url: Url,
    api_key: Arc<str>,
    timeout: Duration,
    observer: Arc<dyn Observer>,
}

impl fmt::Debug for StatClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &constants::REDACTED)
            .field("timeout", &self.timeout)
            .field("observer", &self.observer)
            .finish_non_exhaustive()
    }
}

impl StatClient {
    /// Create a new builder.
    pub fn builder() -> StatClientBuilder {
        StatClientBuilder::default()
    }

    /// Build a client from `STATBOARD_API_BASE_URL`, `STATBOARD_API_KEY` and
    /// the optional `STATBOARD_TIMEOUT_MS`.
    ///
    /// # Errors
    ///
    /// Returns `StatError::Config` if a required variable is missing or a value
    /// does not parse.
    pub fn from_env() -> Result<Self, StatError> {
        StatClientBuilder::from_env()?.build()
    }

    /// The base URL every resource path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The overall per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn observer(&self) -> &dyn Observer {
        self.observer.as_ref()
    }

    /// Issues a `GET` to `path` (relative to the base URL) with `params` plus
    /// the API key.
    ///
    /// # Errors
    ///
    /// Returns `StatError::Network`, `StatError::Timeout` or `StatError::Status`
    /// after reporting a [`Diagnostic`] to the observer.
    pub async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<ApiResponse, StatError> {
        self.send(Method::GET, path, params).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, StatError> {
        let endpoint = net::endpoint(&self.base_url, path)?;
        let query = net::with_key(params, &self.api_key);

        let mut url = endpoint.clone();
        url.query_pairs_mut().extend_pairs(query.iter());

        let resp = match self.http.request(method.clone(), url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                self.report(&endpoint, &method, &query, e.to_string(), None, None);
                return Err(StatError::from_transport(e, endpoint));
            }
        };

        let status = resp.status();
        let headers = resp.headers().clone();
        let mut final_url = resp.url().clone();
        final_url.set_query(None);
        final_url.set_fragment(None);
        let body = match net::get_text(resp).await {
            Ok(body) => body,
            Err(e) => {
                self.report(
                    &endpoint,
                    &method,
                    &query,
                    e.to_string(),
                    Some(status.as_u16()),
                    None,
                );
                return Err(StatError::from_transport(e, endpoint));
            }
        };

        if !status.is_success() {
            let message = format!("Request failed with status code {}", status.as_u16());
            let data = (!body.is_empty()).then(|| body.clone());
            self.report(&endpoint, &method, &query, message, Some(status.as_u16()), data);
            return Err(StatError::Status {
                status: status.as_u16(),
                url: endpoint,
                body,
            });
        }

        Ok(ApiResponse {
            status: status.as_u16(),
            url: final_url,
            headers,
            body,
        })
    }

    fn report(
        &self,
        url: &Url,
        method: &Method,
        query: &[(String, String)],
        message: String,
        status: Option<u16>,
        data: Option<String>,
    ) {
        let diagnostic = Diagnostic {
            url: url.clone(),
            method: method.clone(),
            params: net::redacted(query),
            message,
            status,
            data,
        };
        self.observer.on_failure(&diagnostic);
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct StatClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    observer: Option<Arc<dyn Observer>>,
}

impl StatClientBuilder {
    /// Seed a builder from the process environment.
    ///
    /// Missing required variables are left unset so `build()` reports them;
    /// further builder calls may still fill them in.
    ///
    /// # Errors
    ///
    /// Returns `StatError::Config` if a variable is present but malformed.
    pub fn from_env() -> Result<Self, StatError> {
        let mut builder = Self::default();

        if let Ok(raw) = env::var(ENV_BASE_URL) {
            let url = Url::parse(&raw)
                .map_err(|e| StatError::Config(format!("{ENV_BASE_URL}={raw:?}: {e}")))?;
            builder = builder.base_url(url);
        }
        if let Ok(key) = env::var(ENV_API_KEY) {
            builder = builder.api_key(key);
        }
        if let Ok(raw) = env::var(ENV_TIMEOUT_MS) {
            let ms: u64 = raw
                .trim()
                .parse()
                .map_err(|e| StatError::Config(format!("{ENV_TIMEOUT_MS}={raw:?}: {e}")))?;
            builder = builder.timeout(Duration::from_millis(ms));
        }

        Ok(builder)
    }

    /// Set the backend base URL. Resource paths are appended to its path.
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the API key sent as the `key` query parameter.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set the overall request timeout. Default: 10 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Replace the default [`TracingObserver`].
    pub fn observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// # Errors
    ///
    /// Returns `StatError::Config` when the base URL or API key is missing or
    /// the base URL cannot carry a path, and `StatError::Http` if the HTTP
    /// client cannot be built.
    pub fn build(self) -> Result<StatClient, StatError> {
        let base_url = self
            .base_url
            .ok_or_else(|| StatError::Config(format!("base URL is not set ({ENV_BASE_URL})")))?;
        if base_url.cannot_be_a_base() {
            return Err(StatError::Config(format!(
                "base URL cannot be a base: {base_url}"
            )));
        }

        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| StatError::Config(format!("API key is not set ({ENV_API_KEY})")))?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(timeout);

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(StatClient {
            http,
            base_url,
            api_key: api_key.into(),
            timeout,
            observer: self
                .observer
                .unwrap_or_else(|| Arc::new(TracingObserver)),
        })
    }
}
