//! REST client implementation for the Webflow API.
//!
//! This module provides the [`WebflowClient`] type, mapping one method to
//! each logical Webflow operation: meta endpoints, sites, domains,
//! collections, items, e-commerce orders, products, and webhooks.

use std::collections::HashMap;

use serde_json::json;

use crate::clients::rest::{ItemList, RestError};
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, RetryPolicy};
use crate::config::{SiteId, WebflowConfig};

/// Page size used by [`WebflowClient::items_all`].
pub const DEFAULT_PAGE_SIZE: u64 = 100;

/// REST API client for the Webflow API.
///
/// Each method builds one request (path template plus supplied
/// identifiers), sends it through the underlying [`HttpClient`] with the
/// shared credential headers, and returns the parsed JSON body. Item and
/// order field updates are wrapped under a `fields` key, matching what the
/// API expects for write operations.
///
/// Site-scoped endpoints (publishing, domains, orders, products, webhooks)
/// use the site id fixed at construction.
///
/// # Retries and write operations
///
/// Every request — reads and writes alike — runs under the client's
/// [`RetryPolicy`]. A write retried after an ambiguous network failure may
/// have already been applied server-side; callers that need exactly-once
/// writes should set `retries(1)` in the configuration and handle
/// transient failures themselves.
///
/// # Thread Safety
///
/// `WebflowClient` is `Send + Sync`, making it safe to share across async
/// tasks. Calls never touch shared mutable state.
///
/// # Example
///
/// ```rust,ignore
/// use webflow_api::{WebflowClient, WebflowConfig, ApiToken, SiteId};
///
/// let config = WebflowConfig::builder()
///     .api_token(ApiToken::new("token").unwrap())
///     .site_id(SiteId::new("580e63e98c9a982ac9b8b741").unwrap())
///     .build()?;
///
/// let client = WebflowClient::new(&config);
///
/// // Site info
/// let site = client.site().await?;
///
/// // Every item of a collection, across pages
/// let items = client.items_all("580e63fc8c9a982ac9b8b745").await?;
/// println!("{} items", items.count);
///
/// // Create an item
/// let created = client
///     .create_item(
///         "580e63fc8c9a982ac9b8b745",
///         serde_json::json!({"name": "Exciting blog post", "_archived": false, "_draft": false}),
///         false,
///     )
///     .await?;
/// ```
#[derive(Debug)]
pub struct WebflowClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// The site id for site-scoped endpoints.
    site_id: SiteId,
}

// Verify WebflowClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WebflowClient>();
};

impl WebflowClient {
    /// Creates a new client for the given configuration.
    ///
    /// The retry policy is derived from [`WebflowConfig::retries`]; use
    /// [`Self::with_retry_policy`] for finer control over backoff.
    #[must_use]
    pub fn new(config: &WebflowConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
            site_id: config.site_id().clone(),
        }
    }

    /// Creates a new client with an explicit retry policy.
    #[must_use]
    pub fn with_retry_policy(config: &WebflowConfig, retry_policy: RetryPolicy) -> Self {
        Self {
            http_client: HttpClient::with_retry_policy(config, retry_policy),
            site_id: config.site_id().clone(),
        }
    }

    /// Returns the site id this client is scoped to.
    #[must_use]
    pub const fn site_id(&self) -> &SiteId {
        &self.site_id
    }

    // === Meta ===

    /// Retrieves information about the authorization token.
    pub async fn info(&self) -> Result<serde_json::Value, RestError> {
        self.get("/info".to_string()).await
    }

    /// Retrieves the user the token belongs to.
    ///
    /// Requires a token with the `users:read` scope.
    pub async fn user(&self) -> Result<serde_json::Value, RestError> {
        self.get("/user".to_string()).await
    }

    // === Sites ===

    /// Lists all sites the token can access.
    pub async fn sites(&self) -> Result<serde_json::Value, RestError> {
        self.get("/sites".to_string()).await
    }

    /// Retrieves the configured site.
    pub async fn site(&self) -> Result<serde_json::Value, RestError> {
        self.get(format!("/sites/{}", self.site_id)).await
    }

    /// Publishes the configured site to the given domains.
    pub async fn publish_site(&self, domain_names: &[&str]) -> Result<serde_json::Value, RestError> {
        self.make_request(
            HttpMethod::Post,
            format!("/sites/{}/publish", self.site_id),
            Some(json!({ "domains": domain_names })),
            None,
        )
        .await
    }

    /// Lists the custom domains of the configured site.
    pub async fn domains(&self) -> Result<serde_json::Value, RestError> {
        self.get(format!("/sites/{}/domains", self.site_id)).await
    }

    // === Collections ===

    /// Lists the collections of the configured site.
    pub async fn collections(&self) -> Result<serde_json::Value, RestError> {
        self.get(format!("/sites/{}/collections", self.site_id))
            .await
    }

    /// Retrieves a collection with its full schema.
    pub async fn collection(&self, collection_id: &str) -> Result<serde_json::Value, RestError> {
        self.get(format!("/collections/{collection_id}")).await
    }

    // === Items ===

    /// Retrieves a single page of a collection's items.
    ///
    /// `limit` caps the page size (the API allows at most 100) and
    /// `offset` selects the window start.
    pub async fn items(
        &self,
        collection_id: &str,
        limit: u64,
        offset: u64,
    ) -> Result<ItemList, RestError> {
        let mut query = HashMap::new();
        query.insert("limit".to_string(), limit.to_string());
        query.insert("offset".to_string(), offset.to_string());

        let body = self
            .make_request(
                HttpMethod::Get,
                format!("/collections/{collection_id}/items"),
                None,
                Some(query),
            )
            .await?;

        serde_json::from_value(body).map_err(|err| RestError::UnexpectedPayload {
            operation: "items",
            detail: err.to_string(),
        })
    }

    /// Retrieves every item of a collection, fetching pages as needed.
    ///
    /// Pages of [`DEFAULT_PAGE_SIZE`] items are requested at strictly
    /// increasing offsets and appended in server order; nothing is
    /// reordered or deduplicated. The total reported by the first page
    /// decides how far to go. If the server returns a short page before
    /// that total is reached (its view shrank mid-listing), the loop ends
    /// there instead of refetching forever.
    ///
    /// The result aggregates all pages: `count` equals `items.len()`,
    /// `offset` is 0, `limit` equals `count`.
    ///
    /// # Errors
    ///
    /// Fails with the first page fetch that fails; partially aggregated
    /// results are never returned.
    pub async fn items_all(&self, collection_id: &str) -> Result<ItemList, RestError> {
        let first = self.items(collection_id, DEFAULT_PAGE_SIZE, 0).await?;
        let total = first.total;
        let mut last_page_len = first.items.len() as u64;
        let mut items = first.items;
        let mut offset = 0;

        while (items.len() as u64) < total {
            if last_page_len < DEFAULT_PAGE_SIZE {
                tracing::debug!(
                    collection_id,
                    fetched = items.len(),
                    total,
                    "item listing ended early on a short page"
                );
                break;
            }

            offset += DEFAULT_PAGE_SIZE;
            let page = self.items(collection_id, DEFAULT_PAGE_SIZE, offset).await?;
            last_page_len = page.items.len() as u64;
            items.extend(page.items);
        }

        let count = items.len() as u64;
        Ok(ItemList {
            items,
            count,
            limit: count,
            offset: 0,
            total,
        })
    }

    /// Retrieves a single item.
    pub async fn item(
        &self,
        collection_id: &str,
        item_id: &str,
    ) -> Result<serde_json::Value, RestError> {
        self.get(format!("/collections/{collection_id}/items/{item_id}"))
            .await
    }

    /// Creates an item in a collection.
    ///
    /// `fields` is the item's field mapping; it is sent wrapped under the
    /// `fields` key. Pass `live: true` to publish the item immediately
    /// instead of staging it.
    pub async fn create_item(
        &self,
        collection_id: &str,
        fields: serde_json::Value,
        live: bool,
    ) -> Result<serde_json::Value, RestError> {
        self.make_request(
            HttpMethod::Post,
            format!("/collections/{collection_id}/items"),
            Some(Self::wrap_fields(fields)),
            Self::live_query(live),
        )
        .await
    }

    /// Replaces an item's fields.
    pub async fn update_item(
        &self,
        collection_id: &str,
        item_id: &str,
        fields: serde_json::Value,
        live: bool,
    ) -> Result<serde_json::Value, RestError> {
        self.make_request(
            HttpMethod::Put,
            format!("/collections/{collection_id}/items/{item_id}"),
            Some(Self::wrap_fields(fields)),
            Self::live_query(live),
        )
        .await
    }

    /// Updates a subset of an item's fields.
    pub async fn patch_item(
        &self,
        collection_id: &str,
        item_id: &str,
        fields: serde_json::Value,
        live: bool,
    ) -> Result<serde_json::Value, RestError> {
        self.make_request(
            HttpMethod::Patch,
            format!("/collections/{collection_id}/items/{item_id}"),
            Some(Self::wrap_fields(fields)),
            Self::live_query(live),
        )
        .await
    }

    /// Removes an item from a collection.
    pub async fn remove_item(
        &self,
        collection_id: &str,
        item_id: &str,
    ) -> Result<serde_json::Value, RestError> {
        self.make_request(
            HttpMethod::Delete,
            format!("/collections/{collection_id}/items/{item_id}"),
            None,
            None,
        )
        .await
    }

    // === E-commerce ===

    /// Retrieves the inventory of an item.
    pub async fn item_inventory(
        &self,
        collection_id: &str,
        item_id: &str,
    ) -> Result<serde_json::Value, RestError> {
        self.get(format!(
            "/collections/{collection_id}/items/{item_id}/inventory"
        ))
        .await
    }

    /// Updates the inventory of an item.
    pub async fn update_item_inventory(
        &self,
        collection_id: &str,
        item_id: &str,
        fields: serde_json::Value,
    ) -> Result<serde_json::Value, RestError> {
        self.make_request(
            HttpMethod::Patch,
            format!("/collections/{collection_id}/items/{item_id}/inventory"),
            Some(Self::wrap_fields(fields)),
            None,
        )
        .await
    }

    /// Lists the orders of the configured site.
    pub async fn orders(&self) -> Result<serde_json::Value, RestError> {
        self.get(format!("/sites/{}/orders", self.site_id)).await
    }

    /// Retrieves a single order.
    pub async fn order(&self, order_id: &str) -> Result<serde_json::Value, RestError> {
        self.get(format!("/sites/{}/order/{order_id}", self.site_id))
            .await
    }

    /// Updates an order's fields.
    pub async fn update_order(
        &self,
        order_id: &str,
        fields: serde_json::Value,
    ) -> Result<serde_json::Value, RestError> {
        self.make_request(
            HttpMethod::Patch,
            format!("/sites/{}/order/{order_id}", self.site_id),
            Some(Self::wrap_fields(fields)),
            None,
        )
        .await
    }

    /// Marks an order as fulfilled.
    ///
    /// `details` can carry fulfillment options (e.g.
    /// `{"sendOrderFulfilledEmail": true}`); pass `None` for the defaults.
    pub async fn fulfill_order(
        &self,
        order_id: &str,
        details: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, RestError> {
        self.make_request(
            HttpMethod::Post,
            format!("/sites/{}/order/{order_id}/fulfill", self.site_id),
            Some(details.unwrap_or_else(|| json!({}))),
            None,
        )
        .await
    }

    /// Reverts an order to the unfulfilled state.
    pub async fn unfulfill_order(&self, order_id: &str) -> Result<serde_json::Value, RestError> {
        self.make_request(
            HttpMethod::Post,
            format!("/sites/{}/order/{order_id}/unfulfill", self.site_id),
            Some(json!({})),
            None,
        )
        .await
    }

    /// Refunds an order and restocks its items.
    pub async fn refund_order(&self, order_id: &str) -> Result<serde_json::Value, RestError> {
        self.make_request(
            HttpMethod::Post,
            format!("/sites/{}/order/{order_id}/refund", self.site_id),
            Some(json!({})),
            None,
        )
        .await
    }

    /// Lists the products of the configured site.
    pub async fn products(&self) -> Result<serde_json::Value, RestError> {
        self.get(format!("/sites/{}/products", self.site_id)).await
    }

    // === Webhooks ===

    /// Lists the webhooks registered on the configured site.
    pub async fn webhooks(&self) -> Result<serde_json::Value, RestError> {
        self.get(format!("/sites/{}/webhooks", self.site_id)).await
    }

    /// Retrieves a single webhook.
    pub async fn webhook(&self, webhook_id: &str) -> Result<serde_json::Value, RestError> {
        self.get(format!("/sites/{}/webhooks/{webhook_id}", self.site_id))
            .await
    }

    /// Registers a webhook on the configured site.
    ///
    /// `trigger_type` names the event (e.g. `form_submission`,
    /// `ecomm_new_order`); `filter` narrows triggers that support it.
    pub async fn create_webhook(
        &self,
        trigger_type: &str,
        url: &str,
        filter: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, RestError> {
        let mut body = json!({
            "triggerType": trigger_type,
            "url": url,
        });
        if let Some(filter) = filter {
            body["filter"] = filter;
        }

        self.make_request(
            HttpMethod::Post,
            format!("/sites/{}/webhooks", self.site_id),
            Some(body),
            None,
        )
        .await
    }

    /// Removes a webhook from the configured site.
    pub async fn remove_webhook(&self, webhook_id: &str) -> Result<serde_json::Value, RestError> {
        self.make_request(
            HttpMethod::Delete,
            format!("/sites/{}/webhooks/{webhook_id}", self.site_id),
            None,
            None,
        )
        .await
    }

    // === Internals ===

    /// Shorthand for body-less GET operations.
    async fn get(&self, path: String) -> Result<serde_json::Value, RestError> {
        self.make_request(HttpMethod::Get, path, None, None).await
    }

    /// Internal helper to build and send requests.
    async fn make_request(
        &self,
        method: HttpMethod,
        path: String,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, RestError> {
        let mut builder = HttpRequest::builder(method, path);

        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }

        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        let response = self.http_client.request(request).await?;
        Ok(response.body)
    }

    /// Wraps a field mapping the way the API expects write payloads.
    fn wrap_fields(fields: serde_json::Value) -> serde_json::Value {
        json!({ "fields": fields })
    }

    /// Query marking a write as applying to the published site.
    fn live_query(live: bool) -> Option<HashMap<String, String>> {
        live.then(|| HashMap::from([("live".to_string(), "true".to_string())]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiToken;
    use serde_json::json;

    fn create_test_config() -> WebflowConfig {
        WebflowConfig::builder()
            .api_token(ApiToken::new("test-token").unwrap())
            .site_id(SiteId::new("test-site").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_keeps_configured_site_id() {
        let client = WebflowClient::new(&create_test_config());
        assert_eq!(client.site_id().as_ref(), "test-site");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WebflowClient>();
    }

    #[test]
    fn test_wrap_fields_nests_payload() {
        let wrapped = WebflowClient::wrap_fields(json!({"name": "x"}));
        assert_eq!(wrapped, json!({"fields": {"name": "x"}}));
    }

    #[test]
    fn test_live_query_only_set_when_live() {
        assert!(WebflowClient::live_query(false).is_none());

        let query = WebflowClient::live_query(true).unwrap();
        assert_eq!(query.get("live"), Some(&"true".to_string()));
    }
}
