//! REST-specific error types for the Webflow API client.
//!
//! This module contains the error type for REST operations, wrapping the
//! HTTP-level errors and adding the dispatcher's own failure case.
//!
//! # Error Handling
//!
//! - [`RestError::UnexpectedPayload`]: a successful response body lacks the
//!   keys an operation needs (e.g. an item listing without `items`/`total`)
//! - [`RestError::Http`]: wraps underlying [`HttpError`]s
//!
//! # Example
//!
//! ```rust,ignore
//! use webflow_api::{RestError, HttpError};
//!
//! match client.item("cid", "iid").await {
//!     Ok(item) => println!("Item: {item}"),
//!     Err(RestError::Http(HttpError::Response(e))) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(RestError::Http(HttpError::MaxRetries(e))) => {
//!         println!("Retries exhausted after {} tries", e.tries);
//!     }
//!     Err(err) => println!("Other failure: {err}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST API operations.
#[derive(Debug, Error)]
pub enum RestError {
    /// A 2xx response body did not have the shape the operation requires.
    ///
    /// Distinct from [`HttpError::MalformedBody`]: the body was valid JSON,
    /// but is missing keys the operation depends on.
    #[error("Unexpected payload from {operation}: {detail}")]
    UnexpectedPayload {
        /// The operation whose response was unusable.
        operation: &'static str,
        /// Description of the mismatch.
        detail: String,
    },

    /// An HTTP-level error occurred.
    ///
    /// This variant wraps [`HttpError`] for unified error handling.
    #[error(transparent)]
    Http(#[from] HttpError),
}
