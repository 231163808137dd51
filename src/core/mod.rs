//! Core components of the `statboard` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`StatClient`] and its builder.
//! - The primary [`StatError`] type and the request failure taxonomy.
//! - The [`Diagnostic`] record and the [`Observer`] hook it is delivered to.
//! - Shared data models like [`DateRange`] and [`ApiResponse`].

/// The main client (`StatClient`), builder, and configuration.
pub mod client;
/// Failure diagnostics and the observer hook.
pub mod diagnostics;
/// The primary error type (`StatError`) for the crate.
pub mod error;
/// Shared data models used by the resource fetchers.
pub mod models;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::StatClient`
pub use client::constants::{ENV_API_KEY, ENV_BASE_URL, ENV_TIMEOUT_MS};
pub use client::{StatClient, StatClientBuilder};
pub use diagnostics::{Diagnostic, Observer, TracingObserver};
pub use error::{FailureKind, StatError};
pub use models::{ApiResponse, DateRange};
