//! # Webflow API Rust client
//!
//! A Rust client for the Webflow API, providing type-safe configuration,
//! bearer-token authentication, and an HTTP layer with bounded retries for
//! sites, collections, items, e-commerce orders, and webhooks.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`WebflowConfig`] and [`WebflowConfigBuilder`]
//! - Validated newtypes for the API token and site id
//! - An async HTTP client with a bounded retry policy and capped
//!   exponential backoff ([`clients::HttpClient`], [`RetryPolicy`])
//! - A high-level client with one method per API operation
//!   ([`WebflowClient`])
//! - Offset-based pagination aggregation for collection items
//!   ([`ItemList`])
//!
//! ## Quick Start
//!
//! ```rust
//! use webflow_api::{WebflowConfig, ApiToken, SiteId};
//!
//! // Create configuration using the builder pattern
//! let config = WebflowConfig::builder()
//!     .api_token(ApiToken::new("your-api-token").unwrap())
//!     .site_id(SiteId::new("580e63e98c9a982ac9b8b741").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! Or source the credentials from the environment
//! (`WEBFLOW_API_TOKEN`, `WEBFLOW_SITE_ID`):
//!
//! ```rust,no_run
//! use webflow_api::WebflowConfig;
//!
//! let config = WebflowConfig::from_env().unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use webflow_api::{WebflowClient, WebflowConfig};
//!
//! let config = WebflowConfig::from_env()?;
//! let client = WebflowClient::new(&config);
//!
//! // Read the configured site
//! let site = client.site().await?;
//!
//! // List every item of a collection, across pages
//! let items = client.items_all("580e63fc8c9a982ac9b8b745").await?;
//! for item in &items {
//!     println!("{}", item["name"]);
//! }
//!
//! // Update an item's fields (sent nested under "fields")
//! let updated = client
//!     .patch_item(
//!         "580e63fc8c9a982ac9b8b745",
//!         "580e64008c9a982ac9b8b754",
//!         serde_json::json!({"name": "Renamed post"}),
//!         false,
//!     )
//!     .await?;
//! ```
//!
//! ## Error Handling
//!
//! Failures are structured and inspectable — see
//! [`clients::HttpError`] and [`RestError`]. Transient failures
//! (rate limiting, transient server errors, connection failures) are
//! retried under the configured [`RetryPolicy`]; once the attempt budget
//! is spent, [`clients::MaxHttpRetriesExceededError`] is returned to the
//! caller. The crate never terminates the process; the
//! [`WebflowConfig::abort_on_error`] flag is carried purely for the
//! outermost caller to act on.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Bounded retries**: Every request finishes in a fixed number of attempts

pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{ApiToken, HostUrl, SiteId, WebflowConfig, WebflowConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError, RateLimit,
    RetryPolicy,
};

// Re-export REST client types
pub use clients::rest::{ItemList, RestError, WebflowClient, DEFAULT_PAGE_SIZE};
