//! Configuration types for the Webflow API client.
//!
//! This module provides the core configuration types used to initialize
//! a client for API communication with Webflow.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`WebflowConfig`]: The main configuration struct holding all client settings
//! - [`WebflowConfigBuilder`]: A builder for constructing [`WebflowConfig`] instances
//! - [`ApiToken`]: A validated API token newtype with masked debug output
//! - [`SiteId`]: A validated Webflow site id
//! - [`HostUrl`]: A validated endpoint override URL
//!
//! # Example
//!
//! ```rust
//! use webflow_api::{WebflowConfig, ApiToken, SiteId};
//!
//! let config = WebflowConfig::builder()
//!     .api_token(ApiToken::new("my-api-token").unwrap())
//!     .site_id(SiteId::new("580e63e98c9a982ac9b8b741").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiToken, HostUrl, SiteId};

use std::env;

use crate::error::ConfigError;

/// Environment variable holding the API token for [`WebflowConfig::from_env`].
pub const ENV_API_TOKEN: &str = "WEBFLOW_API_TOKEN";

/// Environment variable holding the site id for [`WebflowConfig::from_env`].
pub const ENV_SITE_ID: &str = "WEBFLOW_SITE_ID";

/// Environment variable optionally overriding the API host for
/// [`WebflowConfig::from_env`].
pub const ENV_API_HOST: &str = "WEBFLOW_API_HOST";

/// Default number of attempts per request (one initial try plus two retries).
pub const DEFAULT_RETRIES: u32 = 3;

/// Configuration for the Webflow API client.
///
/// This struct holds all configuration needed for client operations:
/// credentials, the site the client is scoped to, retry behavior, and
/// optional endpoint/user-agent overrides. It is immutable after
/// construction; there is no process-global fallback state.
///
/// # Thread Safety
///
/// `WebflowConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use webflow_api::{WebflowConfig, ApiToken, SiteId};
///
/// let config = WebflowConfig::builder()
///     .api_token(ApiToken::new("my-api-token").unwrap())
///     .site_id(SiteId::new("580e63e98c9a982ac9b8b741").unwrap())
///     .retries(5)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.retries(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct WebflowConfig {
    api_token: ApiToken,
    site_id: SiteId,
    host: Option<HostUrl>,
    retries: u32,
    abort_on_error: bool,
    user_agent_prefix: Option<String>,
}

// Verify WebflowConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WebflowConfig>();
};

impl WebflowConfig {
    /// Creates a new builder for constructing a `WebflowConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use webflow_api::{WebflowConfig, ApiToken, SiteId};
    ///
    /// let config = WebflowConfig::builder()
    ///     .api_token(ApiToken::new("token").unwrap())
    ///     .site_id(SiteId::new("site").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> WebflowConfigBuilder {
        WebflowConfigBuilder::new()
    }

    /// Creates a configuration from environment variables.
    ///
    /// Reads `WEBFLOW_API_TOKEN` and `WEBFLOW_SITE_ID`, and optionally
    /// `WEBFLOW_API_HOST` to override the default endpoint. All other
    /// settings take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if a required variable is not
    /// set, or a validation error if a value is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = env::var(ENV_API_TOKEN).map_err(|_| ConfigError::MissingEnvVar {
            name: ENV_API_TOKEN,
        })?;
        let site_id = env::var(ENV_SITE_ID).map_err(|_| ConfigError::MissingEnvVar {
            name: ENV_SITE_ID,
        })?;

        let mut builder = Self::builder()
            .api_token(ApiToken::new(token)?)
            .site_id(SiteId::new(site_id)?);

        if let Ok(host) = env::var(ENV_API_HOST) {
            builder = builder.host(HostUrl::new(host)?);
        }

        builder.build()
    }

    /// Returns the API token.
    #[must_use]
    pub const fn api_token(&self) -> &ApiToken {
        &self.api_token
    }

    /// Returns the site id this client is scoped to.
    #[must_use]
    pub const fn site_id(&self) -> &SiteId {
        &self.site_id
    }

    /// Returns the endpoint override, if configured.
    #[must_use]
    pub const fn host(&self) -> Option<&HostUrl> {
        self.host.as_ref()
    }

    /// Returns the number of attempts per request.
    #[must_use]
    pub const fn retries(&self) -> u32 {
        self.retries
    }

    /// Returns whether the caller considers exhausted retries fatal.
    ///
    /// The client itself never terminates the process; it always returns a
    /// structured error. This flag is carried so the outermost caller can
    /// decide whether to abort when it observes
    /// [`MaxHttpRetriesExceededError`](crate::clients::MaxHttpRetriesExceededError).
    #[must_use]
    pub const fn abort_on_error(&self) -> bool {
        self.abort_on_error
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

/// Builder for constructing [`WebflowConfig`] instances.
///
/// This builder provides a fluent API for configuring the client. Required
/// fields are `api_token` and `site_id`. All other fields have sensible
/// defaults.
///
/// # Defaults
///
/// - `retries`: 3 attempts per request
/// - `abort_on_error`: `false`
/// - `host`: `None` (the production Webflow endpoint)
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use webflow_api::{WebflowConfig, ApiToken, SiteId, HostUrl};
///
/// let config = WebflowConfig::builder()
///     .api_token(ApiToken::new("token").unwrap())
///     .site_id(SiteId::new("580e63e98c9a982ac9b8b741").unwrap())
///     .host(HostUrl::new("https://api.staging.example.com").unwrap())
///     .retries(5)
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct WebflowConfigBuilder {
    api_token: Option<ApiToken>,
    site_id: Option<SiteId>,
    host: Option<HostUrl>,
    retries: Option<u32>,
    abort_on_error: Option<bool>,
    user_agent_prefix: Option<String>,
}

impl WebflowConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn api_token(mut self, token: ApiToken) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Sets the site id (required).
    #[must_use]
    pub fn site_id(mut self, site_id: SiteId) -> Self {
        self.site_id = Some(site_id);
        self
    }

    /// Sets the endpoint override URL.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the number of attempts per request.
    ///
    /// Values below 1 are clamped to 1: every request is sent at least once.
    #[must_use]
    pub const fn retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries);
        self
    }

    /// Sets whether the caller considers exhausted retries fatal.
    ///
    /// See [`WebflowConfig::abort_on_error`] for semantics.
    #[must_use]
    pub const fn abort_on_error(mut self, abort: bool) -> Self {
        self.abort_on_error = Some(abort);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`WebflowConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_token` or
    /// `site_id` are not set.
    pub fn build(self) -> Result<WebflowConfig, ConfigError> {
        let api_token = self.api_token.ok_or(ConfigError::MissingRequiredField {
            field: "api_token",
        })?;
        let site_id = self
            .site_id
            .ok_or(ConfigError::MissingRequiredField { field: "site_id" })?;

        Ok(WebflowConfig {
            api_token,
            site_id,
            host: self.host,
            retries: self.retries.unwrap_or(DEFAULT_RETRIES).max(1),
            abort_on_error: self.abort_on_error.unwrap_or(false),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
