//! HTTP client for Webflow API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Webflow API, and the [`RetryPolicy`] governing how
//! transient failures are retried.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::WebflowConfig;

/// The production Webflow API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.webflow.com";

/// Value of the `accept-version` header sent with every request.
pub const ACCEPT_VERSION: &str = "1.0.0";

/// Client version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Statuses retried by default: rate limiting plus transient server errors.
pub const DEFAULT_RETRYABLE_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(500);
const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(10);

/// Retry policy applied to every request a client sends.
///
/// The policy is fixed at client construction: a total attempt budget, a
/// capped exponential backoff, and the set of statuses considered
/// transient. Waits grow as `min(base_delay * 2^attempt, max_delay)`, so
/// consecutive delays never decrease; a `Retry-After` header on a 429
/// response overrides the computed delay for that wait.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use webflow_api::RetryPolicy;
///
/// let policy = RetryPolicy::new(5)
///     .with_base_delay(Duration::from_millis(250))
///     .with_max_delay(Duration::from_secs(8));
///
/// assert_eq!(policy.max_attempts(), 5);
/// assert!(policy.is_retryable(429));
/// assert!(!policy.is_retryable(404));
/// ```
#[derive(Clone, Debug)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
    max_delay: Duration,
    retryable_statuses: Vec<u16>,
}

impl RetryPolicy {
    /// Creates a policy with the given attempt budget and default backoff.
    ///
    /// Values below 1 are clamped to 1: every request is sent at least once.
    #[must_use]
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay: DEFAULT_BASE_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
            retryable_statuses: DEFAULT_RETRYABLE_STATUSES.to_vec(),
        }
    }

    /// Sets the delay before the first retry.
    #[must_use]
    pub const fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    /// Sets the ceiling the exponential backoff saturates at.
    #[must_use]
    pub const fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Replaces the set of statuses considered transient.
    #[must_use]
    pub fn with_retryable_statuses(mut self, statuses: impl Into<Vec<u16>>) -> Self {
        self.retryable_statuses = statuses.into();
        self
    }

    /// Returns the total attempt budget (initial try included).
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns `true` if the given status should be retried.
    #[must_use]
    pub fn is_retryable(&self, status: u16) -> bool {
        self.retryable_statuses.contains(&status)
    }

    /// Returns the backoff delay after the given zero-based attempt.
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 1_u32 << attempt.min(31);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_RETRIES)
    }
}

/// HTTP client for making requests to the Webflow API.
///
/// The client handles:
/// - Base URI selection (production endpoint or a configured override)
/// - Default headers: bearer authorization, `Accept`, `accept-version`,
///   and `User-Agent`
/// - Automatic retry with capped exponential backoff for transient
///   statuses and connection failures
/// - Strict JSON parsing of success bodies
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use webflow_api::{WebflowConfig, ApiToken, SiteId};
/// use webflow_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = WebflowConfig::builder()
///     .api_token(ApiToken::new("token").unwrap())
///     .site_id(SiteId::new("site").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/sites")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.webflow.com`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Retry policy applied to every request.
    retry_policy: RetryPolicy,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl fmt::Debug for HttpClient {
    // The default header set carries the bearer token; keep it out of logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_uri", &self.base_uri)
            .field("retry_policy", &self.retry_policy)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// The retry policy is derived from [`WebflowConfig::retries`] with
    /// default backoff parameters; use [`Self::with_retry_policy`] for
    /// finer control.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &WebflowConfig) -> Self {
        Self::with_retry_policy(config, RetryPolicy::new(config.retries()))
    }

    /// Creates a new HTTP client with an explicit retry policy.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created.
    #[must_use]
    pub fn with_retry_policy(config: &WebflowConfig, retry_policy: RetryPolicy) -> Self {
        let base_uri = config
            .host()
            .map_or_else(|| DEFAULT_ENDPOINT.to_string(), |host| host.as_ref().to_string());

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Webflow API Library v{SDK_VERSION} | Rust {rust_version}");

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("accept-version".to_string(), ACCEPT_VERSION.to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.api_token().as_ref()),
        );

        // Create reqwest client
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            default_headers,
            retry_policy,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the retry policy for this client.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// Sends an HTTP request to the Webflow API.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction and header merging
    /// - Retry with backoff for transient statuses and connection failures
    /// - Response body parsing
    ///
    /// Non-retryable statuses (success and hard errors alike) consume
    /// exactly one attempt. Transient failures are retried until the
    /// policy's attempt budget is spent, waiting the policy's backoff
    /// delay between attempts.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A non-retryable network error occurs (`Network`)
    /// - A non-retryable, non-2xx response is received (`Response`)
    /// - The attempt budget is exhausted (`MaxRetries`); when no HTTP
    ///   response was ever received, the error carries the synthetic
    ///   status 0
    /// - A 2xx response carries a body that is not valid JSON
    ///   (`MalformedBody`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        // Validate request first
        request.verify()?;

        // Build full URL
        let url = format!("{}{}", self.base_uri, request.path);

        // Merge headers
        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        // Retry loop
        let max_attempts = self.retry_policy.max_attempts();
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;

            // Build the reqwest request
            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Put => self.client.put(&url),
                HttpMethod::Patch => self.client.patch(&url),
                HttpMethod::Delete => self.client.delete(&url),
            };

            // Add headers
            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            // Add query params
            if let Some(query) = &request.query {
                req_builder = req_builder.query(query);
            }

            // Add body
            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            // Send request; connection-level failures count as transient
            let res = match req_builder.send().await {
                Ok(res) => res,
                Err(err) if err.is_connect() || err.is_timeout() => {
                    if attempt >= max_attempts {
                        if max_attempts == 1 {
                            return Err(HttpError::Network(err));
                        }
                        return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                            code: 0,
                            tries: max_attempts,
                            message: format!("No response after {max_attempts} attempts: {err}"),
                            request_id: None,
                        }));
                    }
                    let delay = self.retry_policy.delay_for(attempt - 1);
                    tracing::warn!(
                        "Connection to {} failed on attempt {}/{}: {}; retrying in {:?}",
                        url,
                        attempt,
                        max_attempts,
                        err,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    continue;
                }
                Err(err) => return Err(HttpError::Network(err)),
            };

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await.unwrap_or_default();

            if (200..=299).contains(&code) {
                // Success bodies parse strictly; an unparseable payload is
                // an error in its own right, never an empty success.
                let body = if body_text.is_empty() {
                    serde_json::json!({})
                } else {
                    serde_json::from_str(&body_text).map_err(|err| HttpError::MalformedBody {
                        code,
                        detail: err.to_string(),
                    })?
                };
                return Ok(HttpResponse::new(code, res_headers, body));
            }

            // Error bodies parse leniently; non-JSON text is kept raw
            let body = if body_text.is_empty() {
                serde_json::json!({})
            } else {
                serde_json::from_str(&body_text)
                    .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
            };

            let response = HttpResponse::new(code, res_headers, body);
            let error_message = Self::serialize_error(&response);

            // Check if we should retry
            if !self.retry_policy.is_retryable(code) {
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message: error_message,
                    request_id: response.request_id().map(String::from),
                }));
            }

            // Check if we've exhausted retries
            if attempt >= max_attempts {
                if max_attempts == 1 {
                    return Err(HttpError::Response(HttpResponseError {
                        code,
                        message: error_message,
                        request_id: response.request_id().map(String::from),
                    }));
                }
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: max_attempts,
                    message: error_message,
                    request_id: response.request_id().map(String::from),
                }));
            }

            let delay = self.calculate_retry_delay(&response, code, attempt - 1);
            tracing::warn!(
                "Request to {} returned status {} on attempt {}/{}; retrying in {:?}",
                url,
                code,
                attempt,
                max_attempts,
                delay
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Calculates the retry delay for the given zero-based attempt.
    ///
    /// A `Retry-After` header on a 429 overrides the backoff schedule;
    /// everything else follows the policy's capped exponential.
    fn calculate_retry_delay(&self, response: &HttpResponse, status: u16, attempt: u32) -> Duration {
        if status == 429 {
            if let Some(retry_after) = response.retry_request_after {
                return Duration::from_secs_f64(retry_after.max(0.0));
            }
        }
        self.retry_policy.delay_for(attempt)
    }

    /// Serializes the relevant fields of an error body to a JSON digest.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        // Webflow error payloads carry msg/name/err and, for validation
        // failures, a problems array.
        for key in ["msg", "name", "err", "problems", "raw_body"] {
            if let Some(value) = response.body.get(key) {
                error_body.insert(key.to_string(), value.clone());
            }
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}
