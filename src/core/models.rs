use chrono::NaiveDate;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use url::Url;

use crate::core::StatError;

/// The `(dateFrom, dateTo)` pair used to filter a resource query.
///
/// Values are sent verbatim. No format or ordering check is made, the backend
/// decides what it accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DateRange {
    /// Lower bound, sent as `dateFrom`.
    pub date_from: String,
    /// Upper bound, sent as `dateTo`.
    pub date_to: String,
}

impl DateRange {
    /// Creates a range from two raw values.
    pub fn new(date_from: impl Into<String>, date_to: impl Into<String>) -> Self {
        Self {
            date_from: date_from.into(),
            date_to: date_to.into(),
        }
    }

    /// Creates a range from calendar dates, formatted as `YYYY-MM-DD`.
    #[must_use]
    pub fn from_dates(from: NaiveDate, to: NaiveDate) -> Self {
        Self::new(
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string(),
        )
    }

    pub(crate) fn as_params(&self) -> [(&str, &str); 2] {
        [
            ("dateFrom", self.date_from.as_str()),
            ("dateTo", self.date_to.as_str()),
        ]
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for DateRange {
    fn from((from, to): (A, B)) -> Self {
        Self::new(from, to)
    }
}

/// A successful response, returned as the remote service sent it.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code (always 2xx).
    pub status: u16,
    /// The URL that answered, after any redirects, without the query string.
    pub url: Url,
    /// Response headers.
    pub headers: HeaderMap,
    /// The raw response body.
    pub body: String,
}

impl ApiResponse {
    /// Decodes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns `StatError::Json` if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, StatError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Decodes the body as an untyped JSON value.
    ///
    /// # Errors
    ///
    /// Returns `StatError::Json` if the body is not valid JSON.
    pub fn data(&self) -> Result<serde_json::Value, StatError> {
        self.json()
    }
}
