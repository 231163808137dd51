//! The four date-filtered, read-only resources of the backend.

mod api;

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::core::{ApiResponse, DateRange, StatClient, StatError};

/// One of the backend collections exposed as a date-filtered endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    /// `/incomes`
    Incomes,
    /// `/orders`
    Orders,
    /// `/sales`
    Sales,
    /// `/stocks`
    Stocks,
}

impl Resource {
    /// Every resource, in menu order.
    pub const ALL: [Self; 4] = [Self::Sales, Self::Orders, Self::Stocks, Self::Incomes];

    /// The resource name as it appears in the path.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Incomes => "incomes",
            Self::Orders => "orders",
            Self::Sales => "sales",
            Self::Stocks => "stocks",
        }
    }

    /// The path requested relative to the client's base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Incomes => "/incomes",
            Self::Orders => "/orders",
            Self::Sales => "/sales",
            Self::Stocks => "/stocks",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned when a string names none of the known resources.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resource: {0:?}")]
pub struct ParseResourceError(pub String);

impl FromStr for Resource {
    type Err = ParseResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseResourceError(s.to_string()))
    }
}

/// Fetches `resource` for the given date range and returns the raw response.
///
/// Sends exactly `dateFrom` and `dateTo` (plus the client's API key) and hands
/// the response to the client's observer before returning it.
///
/// # Errors
///
/// Propagates the client's `StatError` unchanged; nothing is retried.
#[tracing::instrument(skip_all, err(level = "debug"), fields(resource = %resource))]
pub async fn fetch_resource(
    client: &StatClient,
    resource: Resource,
    range: &DateRange,
) -> Result<ApiResponse, StatError> {
    api::fetch(client, resource, range).await
}

/// Fetches `/incomes` for the given date range.
///
/// # Errors
///
/// See [`fetch_resource`].
pub async fn fetch_incomes(client: &StatClient, range: &DateRange) -> Result<ApiResponse, StatError> {
    fetch_resource(client, Resource::Incomes, range).await
}

/// Fetches `/orders` for the given date range.
///
/// # Errors
///
/// See [`fetch_resource`].
pub async fn fetch_orders(client: &StatClient, range: &DateRange) -> Result<ApiResponse, StatError> {
    fetch_resource(client, Resource::Orders, range).await
}

/// Fetches `/sales` for the given date range.
///
/// # Errors
///
/// See [`fetch_resource`].
pub async fn fetch_sales(client: &StatClient, range: &DateRange) -> Result<ApiResponse, StatError> {
    fetch_resource(client, Resource::Sales, range).await
}

/// Fetches `/stocks` for the given date range.
///
/// # Errors
///
/// See [`fetch_resource`].
pub async fn fetch_stocks(client: &StatClient, range: &DateRange) -> Result<ApiResponse, StatError> {
    fetch_resource(client, Resource::Stocks, range).await
}

impl StatClient {
    /// Starts a query against one resource.
    pub fn resource(&self, resource: Resource) -> ResourceQuery {
        ResourceQuery::new(self, resource)
    }
}

/// A builder for a single resource query.
///
/// Bounds that are never set are sent as empty strings.
#[derive(Debug, Clone)]
pub struct ResourceQuery {
    client: StatClient,
    resource: Resource,
    range: DateRange,
}

impl ResourceQuery {
    /// Creates a new `ResourceQuery` for a given resource.
    pub fn new(client: &StatClient, resource: Resource) -> Self {
        Self {
            client: client.clone(),
            resource,
            range: DateRange::default(),
        }
    }

    /// Sets `dateFrom`.
    #[must_use]
    pub fn date_from(mut self, value: impl Into<String>) -> Self {
        self.range.date_from = value.into();
        self
    }

    /// Sets `dateTo`.
    #[must_use]
    pub fn date_to(mut self, value: impl Into<String>) -> Self {
        self.range.date_to = value.into();
        self
    }

    /// Sets both bounds at once.
    #[must_use]
    pub fn range(mut self, range: impl Into<DateRange>) -> Self {
        self.range = range.into();
        self
    }

    /// Executes the query and returns the raw response.
    ///
    /// # Errors
    ///
    /// See [`fetch_resource`].
    pub async fn fetch(self) -> Result<ApiResponse, StatError> {
        fetch_resource(&self.client, self.resource, &self.range).await
    }

    /// Executes the query and decodes the body into `T`.
    ///
    /// # Errors
    ///
    /// See [`fetch_resource`]; additionally `StatError::Json` if the body does
    /// not decode.
    #[tracing::instrument(skip_all, err(level = "debug"), fields(resource = %self.resource))]
    pub async fn fetch_json<T: DeserializeOwned>(self) -> Result<T, StatError> {
        api::fetch_json(&self.client, self.resource, &self.range).await
    }
}
