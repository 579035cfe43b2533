//! HTTP-specific error types for the Webflow API client.
//!
//! This module contains error types for HTTP operations, including response
//! errors, retry exhaustion, malformed bodies, and request validation
//! failures.
//!
//! # Error Handling
//!
//! The client uses specific error types for different failure scenarios:
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`MaxHttpRetriesExceededError`]: When retry attempts are exhausted
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! Transient failures (retryable statuses, connection errors) are absorbed
//! by the transport's retry loop and only surface as
//! [`MaxHttpRetriesExceededError`] once the attempt budget is spent.
//!
//! # Example
//!
//! ```rust,ignore
//! use webflow_api::clients::{HttpClient, HttpRequest, HttpMethod, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(HttpError::MaxRetries(e)) => {
//!         println!("Retries exhausted after {} tries", e.tries);
//!     }
//!     Err(HttpError::MalformedBody { code, detail }) => {
//!         println!("Status {code} carried a non-JSON body: {detail}");
//!     }
//!     Err(HttpError::InvalidRequest(e)) => {
//!         println!("Invalid request: {}", e);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// This error includes the status code and a serialized digest of the error
/// body. For Webflow error responses the digest carries the `msg`, `name`,
/// `err` and `problems` fields when present.
///
/// # Example
///
/// ```rust
/// use webflow_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"msg":"Item not found"}"#.to_string(),
///     request_id: Some("abc-123".to_string()),
/// };
///
/// println!("Status {}: {}", error.code, error.message);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Request id for error reporting (from the X-Request-Id header).
    pub request_id: Option<String>,
}

/// Error returned when maximum retry attempts have been exhausted.
///
/// This error is raised when a request continues to fail with a retryable
/// status or a connection-level error after all configured attempts have
/// been made. When no HTTP response was ever received, `code` is the
/// synthetic value 0.
///
/// # Example
///
/// ```rust
/// use webflow_api::clients::MaxHttpRetriesExceededError;
///
/// let error = MaxHttpRetriesExceededError {
///     code: 429,
///     tries: 3,
///     message: r#"{"msg":"Rate limit hit"}"#.to_string(),
///     request_id: None,
/// };
///
/// println!("{}", error); // "Exceeded maximum retry count of 3. Last message: ..."
/// ```
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response, or 0 if no response
    /// was received.
    pub code: u16,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// Serialized error message from the last failure.
    pub message: String,
    /// Request id for error reporting (from the X-Request-Id header).
    pub request_id: Option<String>,
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent if it fails validation
/// checks, such as:
/// - Missing body for POST/PUT/PATCH requests
/// - Body provided without `body_type`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST, PUT, or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// This enum provides a single error type for HTTP operations, making it
/// easier to handle errors at API boundaries. Use pattern matching to
/// handle specific error types.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-retryable, non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// A 2xx response carried a body that is not valid JSON.
    ///
    /// Surfaced as its own variant so callers can distinguish a broken
    /// payload from an API-level failure; never coerced to an empty
    /// success value.
    #[error("Status {code} response body is not valid JSON: {detail}")]
    MalformedBody {
        /// The HTTP status code of the response.
        code: u16,
        /// Description of the parse failure.
        detail: String,
    },

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error that is not retryable.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_displays_message() {
        let error = HttpResponseError {
            code: 404,
            message: r#"{"msg":"Item not found"}"#.to_string(),
            request_id: None,
        };
        assert_eq!(error.to_string(), r#"{"msg":"Item not found"}"#);
    }

    #[test]
    fn test_http_response_error_keeps_request_id() {
        let error = HttpResponseError {
            code: 500,
            message: r#"{"msg":"ServerError"}"#.to_string(),
            request_id: Some("abc-123".to_string()),
        };
        assert_eq!(error.request_id, Some("abc-123".to_string()));
    }

    #[test]
    fn test_max_retries_error_includes_retry_count() {
        let error = MaxHttpRetriesExceededError {
            code: 429,
            tries: 3,
            message: r#"{"msg":"Rate limit hit"}"#.to_string(),
            request_id: None,
        };
        let message = error.to_string();
        assert!(message.contains("3"));
        assert!(message.contains("Exceeded maximum retry count"));
    }

    #[test]
    fn test_max_retries_synthetic_code_zero_for_no_response() {
        let error = MaxHttpRetriesExceededError {
            code: 0,
            tries: 4,
            message: "no response after 4 attempts".to_string(),
            request_id: None,
        };
        assert_eq!(error.code, 0);
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");
    }

    #[test]
    fn test_malformed_body_error_message() {
        let error = HttpError::MalformedBody {
            code: 200,
            detail: "expected value at line 1 column 1".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("200"));
        assert!(message.contains("not valid JSON"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let response_error: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            message: "test".to_string(),
            request_id: None,
        };
        let _ = response_error;

        let max_retries_error: &dyn std::error::Error = &MaxHttpRetriesExceededError {
            code: 429,
            tries: 3,
            message: "test".to_string(),
            request_id: None,
        };
        let _ = max_retries_error;

        let invalid_error: &dyn std::error::Error = &InvalidHttpRequestError::MissingBodyType;
        let _ = invalid_error;
    }
}
