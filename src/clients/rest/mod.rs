//! REST API client for the Webflow API.
//!
//! This module provides a higher-level REST client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that maps one method to each
//! logical Webflow operation.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`WebflowClient`]: the client with one method per API operation
//! - [`ItemList`]: a typed (single-page or aggregated) item listing
//! - [`RestError`]: error type for REST operations
//!
//! # Example
//!
//! ```rust,ignore
//! use webflow_api::{WebflowClient, WebflowConfig, ApiToken, SiteId};
//!
//! let config = WebflowConfig::builder()
//!     .api_token(ApiToken::new("token").unwrap())
//!     .site_id(SiteId::new("580e63e98c9a982ac9b8b741").unwrap())
//!     .build()?;
//!
//! let client = WebflowClient::new(&config);
//!
//! let collections = client.collections().await?;
//! let items = client.items_all("580e63fc8c9a982ac9b8b745").await?;
//! ```
//!
//! # Pagination
//!
//! The item listing endpoint is windowed by `limit` and `offset` query
//! parameters. [`WebflowClient::items`] fetches one window;
//! [`WebflowClient::items_all`] walks the windows at increasing offsets
//! and aggregates them into a single [`ItemList`], preserving server
//! order.
//!
//! # Write payloads
//!
//! Item, order, and inventory updates take the caller's field mapping and
//! send it nested under a `fields` key, which is the shape the API
//! expects. Webhook creation sends its `triggerType`/`url`/`filter`
//! payload as-is.

mod client;
mod errors;
mod pagination;

pub use client::{WebflowClient, DEFAULT_PAGE_SIZE};
pub use errors::RestError;
pub use pagination::ItemList;
