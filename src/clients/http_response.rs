//! HTTP response types for the Webflow API client.
//!
//! This module provides the [`HttpResponse`] type and related types for
//! parsing and accessing API response data.

use std::collections::HashMap;

/// Rate limit information parsed from the `X-RateLimit-Limit` and
/// `X-RateLimit-Remaining` headers.
///
/// Webflow reports the per-minute request allowance and how much of it is
/// left on every response.
///
/// # Example
///
/// ```rust
/// use webflow_api::clients::RateLimit;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-ratelimit-limit".to_string(), vec!["60".to_string()]);
/// headers.insert("x-ratelimit-remaining".to_string(), vec!["58".to_string()]);
///
/// let limit = RateLimit::from_headers(&headers).unwrap();
/// assert_eq!(limit.limit, 60);
/// assert_eq!(limit.remaining, 58);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// The request allowance for the current window.
    pub limit: u32,
    /// Requests remaining in the current window.
    pub remaining: u32,
}

impl RateLimit {
    /// Parses the rate limit header pair.
    ///
    /// Returns `Some(RateLimit)` only when both headers are present and
    /// numeric, `None` otherwise.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        let first = |name: &str| {
            headers
                .get(name)
                .and_then(|values| values.first())
                .and_then(|value| value.parse().ok())
        };

        Some(Self {
            limit: first("x-ratelimit-limit")?,
            remaining: first("x-ratelimit-remaining")?,
        })
    }
}

/// An HTTP response from the Webflow API.
///
/// Contains the response status code, headers, parsed JSON body, and
/// parsed header values like the rate limit pair and retry hints.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Rate limit information (from the `X-RateLimit-*` headers).
    pub rate_limit: Option<RateLimit>,
    /// Seconds to wait before retrying (from the `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse` with automatic header parsing.
    ///
    /// This constructor parses rate-limit and retry headers automatically:
    /// - `X-RateLimit-Limit` / `X-RateLimit-Remaining` -> `rate_limit`
    /// - `Retry-After` -> `retry_request_after`
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let rate_limit = RateLimit::from_headers(&headers);

        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            rate_limit,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This id is useful for debugging and is carried on error values.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(
                response.is_ok(),
                "Expected is_ok() to be true for code {code}"
            );
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 404, 429, 500, 502, 503, 504] {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(!response.is_ok());
        }
    }

    #[test]
    fn test_rate_limit_parsing() {
        let mut headers = HashMap::new();
        headers.insert("x-ratelimit-limit".to_string(), vec!["60".to_string()]);
        headers.insert("x-ratelimit-remaining".to_string(), vec!["12".to_string()]);

        let response = HttpResponse::new(200, headers, json!({}));
        let rate_limit = response.rate_limit.unwrap();
        assert_eq!(rate_limit.limit, 60);
        assert_eq!(rate_limit.remaining, 12);
    }

    #[test]
    fn test_rate_limit_requires_both_headers() {
        let mut headers = HashMap::new();
        headers.insert("x-ratelimit-limit".to_string(), vec!["60".to_string()]);

        let response = HttpResponse::new(200, headers, json!({}));
        assert!(response.rate_limit.is_none());
    }

    #[test]
    fn test_rate_limit_rejects_non_numeric_values() {
        let mut headers = HashMap::new();
        headers.insert("x-ratelimit-limit".to_string(), vec!["sixty".to_string()]);
        headers.insert("x-ratelimit-remaining".to_string(), vec!["12".to_string()]);

        assert!(RateLimit::from_headers(&headers).is_none());
    }

    #[test]
    fn test_retry_after_parsing() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["2.5".to_string()]);

        let response = HttpResponse::new(429, headers, json!({}));
        assert!((response.retry_request_after.unwrap() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_body_returns_empty_json() {
        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert_eq!(response.body, json!({}));
    }

    #[test]
    fn test_request_id_extraction() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["abc-123-xyz".to_string()]);

        let response = HttpResponse::new(200, headers, json!({}));
        assert_eq!(response.request_id(), Some("abc-123-xyz"));
    }
}
