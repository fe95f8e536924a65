//! API gateway client for the remote user directory.
//!
//! Every request reads the current token from the session store and attaches
//! it as a bearer credential when present. Calls are independent; there are
//! no retries and no client-side caching.

mod error;
mod types;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
pub use error::{ApiError, ApiErrorKind, ApiResult, classify_reqwest_error};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use types::{LoginRequest, LoginResponse, SingleUser};
pub use types::{UpdatedUser, User, UserPage, UserUpdate};

use crate::config::Config;
use crate::session::SessionStore;

/// Default base URL for the demo user directory.
pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api";

/// Standard User-Agent header for ewise API requests.
pub const USER_AGENT: &str = concat!("ewise/", env!("CARGO_PKG_VERSION"));

const BASE_URL_ENV: &str = "EWISE_BASE_URL";
const API_KEY_ENV: &str = "EWISE_API_KEY";

/// Connection settings for the client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    /// Sent as `x-api-key` when set
    pub api_key: Option<String>,
    /// Per-request timeout (`None` disables)
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: None,
        }
    }

    /// Resolves settings from config and environment.
    ///
    /// Base URL resolution order:
    /// 1. `EWISE_BASE_URL` env var (if set and non-empty)
    /// 2. `api.base_url` from config
    /// 3. Default: `https://reqres.in/api`
    ///
    /// API key resolution order:
    /// 1. `api.api_key` from config
    /// 2. `EWISE_API_KEY` env var
    ///
    /// # Errors
    /// Returns an error if the resolved base URL is malformed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let base_url = resolve_base_url(config.api.effective_base_url())?;
        let api_key = config.api.effective_api_key().map(str::to_string).or_else(|| {
            std::env::var(API_KEY_ENV)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        });

        Ok(Self {
            base_url,
            api_key,
            timeout: config.api.timeout(),
        })
    }
}

/// Resolves a base URL with precedence: env > config > default.
fn resolve_base_url(config_base_url: Option<&str>) -> Result<String> {
    if let Ok(env_url) = std::env::var(BASE_URL_ENV) {
        let trimmed = env_url.trim();
        if !trimmed.is_empty() {
            validate_url(trimmed)?;
            return Ok(trimmed.to_string());
        }
    }

    if let Some(config_url) = config_base_url {
        validate_url(config_url)?;
        return Ok(config_url.to_string());
    }

    Ok(DEFAULT_BASE_URL.to_string())
}

fn validate_url(url: &str) -> Result<()> {
    url::Url::parse(url).with_context(|| format!("Invalid API base URL: {url}"))?;
    Ok(())
}

/// User directory API client.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    session: Arc<dyn SessionStore>,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a new client.
    ///
    /// Test builds, and runs with `EWISE_BLOCK_REAL_API=1`, refuse to talk to
    /// the production API. Point `EWISE_BASE_URL` at a mock server instead.
    ///
    /// # Errors
    /// Returns an error if the production API is blocked or the HTTP client
    /// cannot be built.
    pub fn new(config: ApiConfig, session: Arc<dyn SessionStore>) -> Result<Self> {
        let blocked =
            cfg!(test) || std::env::var("EWISE_BLOCK_REAL_API").is_ok_and(|v| v == "1");
        if blocked && config.base_url.trim_end_matches('/') == DEFAULT_BASE_URL {
            anyhow::bail!(
                "Refusing to use the production API while it is blocked.\n\
                 Set EWISE_BASE_URL to a mock server.\n\
                 Found base_url: {}",
                config.base_url
            );
        }

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            config,
            session,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Builds a request with the session token and API key attached.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(key) = &self.config.api_key {
            builder = builder.header("x-api-key", key);
        }
        builder
    }

    async fn send(&self, method: Method, path: &str, builder: RequestBuilder) -> ApiResult<Response> {
        tracing::debug!(%method, path, "sending request");
        let response = builder.send().await.map_err(|e| {
            let err = classify_reqwest_error(&e);
            tracing::warn!(%method, path, error = %err, "request failed");
            err
        })?;
        tracing::debug!(%method, path, status = response.status().as_u16(), "response received");
        Ok(response)
    }

    /// Reads an error body and converts it with `make`.
    async fn error_from(response: Response, make: fn(u16, &str) -> ApiError) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let err = make(status, &body);
        tracing::warn!(status, error = %err, "request rejected");
        err
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let body = response
            .text()
            .await
            .map_err(|e| classify_reqwest_error(&e))?;
        serde_json::from_str(&body).map_err(|e| {
            let mut err = ApiError::parse(format!("Unexpected response: {e}"));
            err.details = Some(body);
            err
        })
    }

    /// Exchanges credentials for a token. The caller persists it.
    ///
    /// # Errors
    /// Returns `Auth` when the credentials are rejected.
    pub async fn authenticate(&self, email: &str, password: &str) -> ApiResult<String> {
        let builder = self
            .request(Method::POST, "/login")
            .json(&LoginRequest { email, password });
        let response = self.send(Method::POST, "/login", builder).await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response, ApiError::auth).await);
        }

        let body: LoginResponse = Self::read_json(response).await?;
        match body.token.filter(|t| !t.is_empty()) {
            Some(token) => Ok(token),
            None => {
                let mut err = ApiError::new(ApiErrorKind::Auth, "No token in login response");
                err.remote = body.error;
                Err(err)
            }
        }
    }

    /// Fetches one page of users.
    ///
    /// # Errors
    /// Returns `Network`, `Server` or `Parse` errors verbatim.
    pub async fn list_users(&self, page: u32) -> ApiResult<UserPage> {
        let path = format!("/users?page={page}");
        let builder = self.request(Method::GET, &path);
        let response = self.send(Method::GET, &path, builder).await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response, ApiError::http_status).await);
        }
        Self::read_json(response).await
    }

    /// Fetches a single user.
    ///
    /// # Errors
    /// Returns `NotFound` when the remote reports the id as missing.
    pub async fn get_user(&self, id: u64) -> ApiResult<User> {
        let path = format!("/users/{id}");
        let builder = self.request(Method::GET, &path);
        let response = self.send(Method::GET, &path, builder).await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response, ApiError::http_status).await);
        }
        let body: SingleUser = Self::read_json(response).await?;
        Ok(body.data)
    }

    /// Sends the editable fields for a user.
    ///
    /// The demo backend echoes the update without persisting it.
    ///
    /// # Errors
    /// Returns `Validation` for a blank field (nothing is sent), otherwise
    /// `Network`, `Server` or `Parse` errors.
    pub async fn update_user(&self, id: u64, update: &UserUpdate) -> ApiResult<UpdatedUser> {
        update.validate()?;
        let path = format!("/users/{id}");
        let builder = self.request(Method::PUT, &path).json(update);
        let response = self.send(Method::PUT, &path, builder).await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response, ApiError::http_status).await);
        }
        Self::read_json(response).await
    }

    /// Deletes a user. Any 2xx is success; the body is ignored.
    ///
    /// # Errors
    /// Returns `Network` or `Server` errors.
    pub async fn delete_user(&self, id: u64) -> ApiResult<()> {
        let path = format!("/users/{id}");
        let builder = self.request(Method::DELETE, &path);
        let response = self.send(Method::DELETE, &path, builder).await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response, ApiError::http_status).await);
        }
        Ok(())
    }
}
