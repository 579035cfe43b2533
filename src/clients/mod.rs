//! HTTP client types for Webflow API communication.
//!
//! This module provides the foundational HTTP client layer for making
//! authenticated requests to the Webflow API. It handles request/response
//! processing, the retry policy, and header parsing.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`RetryPolicy`]: Attempt budget, backoff, and retryable status set
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`rest::WebflowClient`]: Higher-level client with one method per operation
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use webflow_api::{WebflowConfig, ApiToken, SiteId};
//! use webflow_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let config = WebflowConfig::builder()
//!     .api_token(ApiToken::new("token").unwrap())
//!     .site_id(SiteId::new("site").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/sites")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! The client retries transient failures under a bounded policy fixed at
//! construction:
//!
//! - **Retryable statuses** (default 429, 500, 502, 503, 504) and
//!   connection-level failures are retried until the attempt budget is
//!   spent, waiting a capped exponential backoff between attempts
//! - **429 responses**: a `Retry-After` header overrides the computed wait
//! - **Everything else** (success and hard errors) consumes exactly one
//!   attempt
//!
//! Exhaustion surfaces as
//! [`MaxHttpRetriesExceededError`] — the client never terminates the
//! process on its own.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{
    HttpClient, RetryPolicy, ACCEPT_VERSION, DEFAULT_ENDPOINT, DEFAULT_RETRYABLE_STATUSES,
    SDK_VERSION,
};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimit};

// Re-export REST client types at the clients module level
pub use rest::{ItemList, RestError, WebflowClient};
