//! statboard-rs: async client for a statistics backend.
//!
//! The backend exposes four read-only resources (incomes, orders, sales and
//! stocks), each filtered by a `dateFrom`/`dateTo` pair. A single
//! [`StatClient`] injects the API key into every request and reports every
//! failure to an [`Observer`] before returning it.
//!
//! ```no_run
//! use statboard::{DateRange, StatClient, fetch_sales};
//!
//! # async fn run() -> Result<(), statboard::StatError> {
//! let client = StatClient::from_env()?;
//! let resp = fetch_sales(&client, &DateRange::new("2024-01-01", "2024-01-31")).await?;
//! println!("{}", resp.body);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod resources;

#[cfg(feature = "tracing-subscriber")]
mod telemetry;

pub use crate::core::{
    ApiResponse, DateRange, Diagnostic, FailureKind, Observer, StatClient, StatClientBuilder,
    StatError, TracingObserver,
};
pub use resources::{
    ParseResourceError, Resource, ResourceQuery, fetch_incomes, fetch_orders, fetch_resource,
    fetch_sales, fetch_stocks,
};

#[cfg(feature = "tracing-subscriber")]
pub use telemetry::init_tracing;
