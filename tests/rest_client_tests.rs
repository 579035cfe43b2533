//! Integration tests for the REST client operations.
//!
//! These tests verify the endpoint mapping, write payload shaping, and
//! the pagination aggregation of `items_all` against a wiremock server.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use webflow_api::{
    ApiToken, HostUrl, HttpError, RestError, RetryPolicy, SiteId, WebflowClient, WebflowConfig,
};

/// Creates a client pointed at the given mock server URI.
fn create_test_client(uri: &str) -> WebflowClient {
    let config = WebflowConfig::builder()
        .api_token(ApiToken::new("test-token").unwrap())
        .site_id(SiteId::new("test-site").unwrap())
        .host(HostUrl::new(uri).unwrap())
        .build()
        .unwrap();

    let policy = RetryPolicy::new(2).with_base_delay(Duration::from_millis(5));
    WebflowClient::with_retry_policy(&config, policy)
}

/// Builds an item listing page body in the Webflow wire shape.
///
/// Items are numbered from `offset` so ordering is observable.
fn page_body(offset: u64, len: u64, limit: u64, total: u64) -> serde_json::Value {
    let items: Vec<serde_json::Value> =
        (offset..offset + len).map(|idx| json!({"idx": idx})).collect();
    json!({
        "items": items,
        "count": len,
        "limit": limit,
        "offset": offset,
        "total": total
    })
}

// ============================================================================
// Endpoint mapping
// ============================================================================

#[tokio::test]
async fn test_site_scoped_paths_use_configured_site_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sites/test-site/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let orders = client.orders().await.unwrap();
    assert_eq!(orders, json!([]));
}

#[tokio::test]
async fn test_order_lifecycle_paths() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sites/test-site/order/ord-1/fulfill"))
        .and(body_json(json!({"sendOrderFulfilledEmail": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"fulfilled": true})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/sites/test-site/order/ord-1/unfulfill"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"fulfilled": false})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/sites/test-site/order/ord-1/refund"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"refunded": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());

    client
        .fulfill_order("ord-1", Some(json!({"sendOrderFulfilledEmail": true})))
        .await
        .unwrap();
    client.unfulfill_order("ord-1").await.unwrap();
    client.refund_order("ord-1").await.unwrap();
}

#[tokio::test]
async fn test_publish_site_sends_domain_list() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sites/test-site/publish"))
        .and(body_json(json!({"domains": ["example.com", "www.example.com"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"queued": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let result = client
        .publish_site(&["example.com", "www.example.com"])
        .await
        .unwrap();
    assert_eq!(result["queued"], true);
}

#[tokio::test]
async fn test_create_webhook_sends_trigger_and_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sites/test-site/webhooks"))
        .and(body_json(json!({
            "triggerType": "form_submission",
            "url": "https://example.com/hook"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_id": "wh-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let webhook = client
        .create_webhook("form_submission", "https://example.com/hook", None)
        .await
        .unwrap();
    assert_eq!(webhook["_id"], "wh-1");
}

#[tokio::test]
async fn test_remove_webhook_uses_delete() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/sites/test-site/webhooks/wh-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let result = client.remove_webhook("wh-1").await.unwrap();
    assert_eq!(result["deleted"], 1);
}

// ============================================================================
// Write payload shaping
// ============================================================================

#[tokio::test]
async fn test_create_item_wraps_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/collections/col-1/items"))
        .and(body_json(json!({"fields": {"name": "x"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_id": "item-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let created = client
        .create_item("col-1", json!({"name": "x"}), false)
        .await
        .unwrap();
    assert_eq!(created["_id"], "item-1");
}

#[tokio::test]
async fn test_update_and_patch_item_wrap_fields() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/collections/col-1/items/item-1"))
        .and(body_json(json!({"fields": {"name": "x"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_id": "item-1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/collections/col-1/items/item-1"))
        .and(body_json(json!({"fields": {"name": "x"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_id": "item-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());

    client
        .update_item("col-1", "item-1", json!({"name": "x"}), false)
        .await
        .unwrap();
    client
        .patch_item("col-1", "item-1", json!({"name": "x"}), false)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_live_flag_adds_query_param() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/collections/col-1/items"))
        .and(query_param("live", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_id": "item-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    client
        .create_item("col-1", json!({"name": "x"}), true)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_item_inventory_wraps_fields() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/collections/col-1/items/item-1/inventory"))
        .and(body_json(json!({"fields": {"inventoryType": "finite", "quantity": 5}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"quantity": 5})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let inventory = client
        .update_item_inventory("col-1", "item-1", json!({"inventoryType": "finite", "quantity": 5}))
        .await
        .unwrap();
    assert_eq!(inventory["quantity"], 5);
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn test_items_returns_single_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/collections/col-1/items"))
        .and(query_param("limit", "10"))
        .and(query_param("offset", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(20, 10, 10, 250)))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let page = client.items("col-1", 10, 20).await.unwrap();

    assert_eq!(page.len(), 10);
    assert_eq!(page.offset, 20);
    assert_eq!(page.total, 250);
}

#[tokio::test]
async fn test_items_all_aggregates_pages_in_order() {
    let server = MockServer::start().await;

    for (offset, len) in [(0_u64, 100_u64), (100, 100), (200, 50)] {
        Mock::given(method("GET"))
            .and(path("/collections/col-1/items"))
            .and(query_param("limit", "100"))
            .and(query_param("offset", offset.to_string().as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(offset, len, 100, 250)))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = create_test_client(&server.uri());
    let all = client.items_all("col-1").await.unwrap();

    assert_eq!(all.count, 250);
    assert_eq!(all.len(), 250);
    assert_eq!(all.total, 250);

    // Server order is preserved across page boundaries
    let order: Vec<u64> = all
        .iter()
        .map(|item| item["idx"].as_u64().unwrap())
        .collect();
    let expected: Vec<u64> = (0..250).collect();
    assert_eq!(order, expected);
}

#[tokio::test]
async fn test_items_all_is_idempotent_against_fixed_state() {
    let server = MockServer::start().await;

    for (offset, len) in [(0_u64, 100_u64), (100, 50)] {
        Mock::given(method("GET"))
            .and(path("/collections/col-1/items"))
            .and(query_param("limit", "100"))
            .and(query_param("offset", offset.to_string().as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(offset, len, 100, 150)))
            .expect(2)
            .mount(&server)
            .await;
    }

    let client = create_test_client(&server.uri());
    let first = client.items_all("col-1").await.unwrap();
    let second = client.items_all("col-1").await.unwrap();

    assert_eq!(first.count, second.count);
    assert_eq!(first.items, second.items);
}

#[tokio::test]
async fn test_items_all_single_page_makes_one_fetch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/collections/col-1/items"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0, 30, 100, 30)))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let all = client.items_all("col-1").await.unwrap();
    assert_eq!(all.count, 30);
}

#[tokio::test]
async fn test_items_all_stops_on_short_page() {
    let server = MockServer::start().await;

    // The first page claims 300 items, but the second page comes up short:
    // the collection shrank mid-listing. No third fetch may happen.
    Mock::given(method("GET"))
        .and(path("/collections/col-1/items"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0, 100, 100, 300)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/collections/col-1/items"))
        .and(query_param("offset", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(100, 50, 100, 300)))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let all = client.items_all("col-1").await.unwrap();

    assert_eq!(all.count, 150);
    assert_eq!(all.total, 300);
}

#[tokio::test]
async fn test_items_with_unexpected_shape_surfaces_payload_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/collections/col-1/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let result = client.items("col-1", 100, 0).await;

    assert!(matches!(
        result,
        Err(RestError::UnexpectedPayload { operation: "items", .. })
    ));
}

// ============================================================================
// Error surfacing
// ============================================================================

#[tokio::test]
async fn test_missing_item_surfaces_api_error_with_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/collections/col-1/items/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"msg": "Item not found", "code": 404})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let result = client.item("col-1", "missing").await;

    match result {
        Err(RestError::Http(HttpError::Response(e))) => {
            assert_eq!(e.code, 404);
            assert!(e.message.contains("Item not found"));
        }
        other => panic!("Expected an API error with status 404, got {other:?}"),
    }
}

#[tokio::test]
async fn test_persistent_rate_limiting_surfaces_retry_exhaustion() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sites/test-site/products"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({"msg": "Rate limit hit"})))
        .expect(2)
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let result = client.products().await;

    match result {
        Err(RestError::Http(HttpError::MaxRetries(e))) => {
            assert_eq!(e.code, 429);
            assert_eq!(e.tries, 2);
        }
        other => panic!("Expected retry exhaustion, got {other:?}"),
    }
}
