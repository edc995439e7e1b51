use crate::error::{ApiError, StorageError};
use crate::storage::config::Config;
use crate::storage::credentials::{MemoryTokenStore, TokenStore};
use reqwest::{Client, Method, RequestBuilder, multipart};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

const USER_AGENT: &str = concat!("sitekit/", env!("CARGO_PKG_VERSION"));

/// Process-wide request defaults, read once from [`Config`] at construction.
#[derive(Debug, Clone)]
pub struct RequestDefaults {
    pub timeout: Duration,
    pub retry_attempts: u32,
    pub retry_delay: Duration,
}

/// Per-call overrides. Every field falls back to the engine defaults.
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    pub timeout: Option<Duration>,
    /// Maximum additional attempts after the first.
    pub retries: Option<u32>,
    pub headers: Vec<(String, String)>,
}

/// Multipart upload payload.
///
/// Holds the raw bytes rather than a built `multipart::Form` so a fresh form
/// can be assembled for every retry attempt (a `Form` is consumed on send).
#[derive(Debug, Clone)]
pub struct UploadPayload {
    pub field: String,
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    pub fields: Vec<(String, String)>,
}

impl UploadPayload {
    pub fn new(
        field: impl Into<String>,
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
            fields: Vec::new(),
        }
    }

    /// Add an extra text field alongside the file part.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    fn to_form(&self) -> Result<multipart::Form, ApiError> {
        let part = multipart::Part::bytes(self.bytes.clone())
            .file_name(self.file_name.clone())
            .mime_str(&self.mime_type)
            .map_err(|e| ApiError::Network {
                message: format!("Invalid MIME type '{}': {}", self.mime_type, e),
            })?;

        let mut form = multipart::Form::new().part(self.field.clone(), part);
        for (name, value) in &self.fields {
            form = form.text(name.clone(), value.clone());
        }
        Ok(form)
    }
}

enum RequestBody<'a, B: Serialize + ?Sized> {
    Empty,
    Json(&'a B),
    Multipart(&'a UploadPayload),
}

/// HTTP request engine for one configured backend.
///
/// Executes a logical operation against `{base_url}{endpoint}`: per-attempt
/// timeout, retry with linearly increasing backoff, bearer-token injection
/// from the injected [`TokenStore`], and normalization of every failure into
/// [`ApiError`]. Cloning is cheap; clones share the token store.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    defaults: RequestDefaults,
}

impl ApiClient {
    /// Create a client with the default in-memory token store.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Self::with_token_store(config, Arc::new(MemoryTokenStore::new()))
    }

    /// Create a client with an application-supplied token store (e.g. the
    /// keyring-backed one).
    pub fn with_token_store(config: &Config, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Network {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(ApiClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
            defaults: RequestDefaults {
                timeout: Duration::from_millis(config.api.timeout_ms),
                retry_attempts: config.api.retry_attempts,
                retry_delay: Duration::from_millis(config.api.retry_delay_ms),
            },
        })
    }

    pub fn set_base_url(&mut self, url: &str) {
        self.base_url = url.trim_end_matches('/').to_string();
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_auth_token(&self, token: &str) -> Result<(), StorageError> {
        self.tokens.set(token)
    }

    pub fn remove_auth_token(&self) -> Result<(), StorageError> {
        self.tokens.clear()
    }

    pub fn auth_token(&self) -> Option<String> {
        self.tokens.get()
    }

    pub fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, url);

        if let Some(token) = self.tokens.get() {
            request = request.bearer_auth(token);
        }

        request
    }

    pub async fn get<T>(&self, endpoint: &str, config: Option<RequestConfig>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        self.execute::<Value, T>(Method::GET, endpoint, RequestBody::Empty, config)
            .await
    }

    pub async fn post<B, T>(
        &self,
        endpoint: &str,
        body: Option<&B>,
        config: Option<RequestConfig>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        match body {
            Some(json) => {
                self.execute(Method::POST, endpoint, RequestBody::Json(json), config)
                    .await
            }
            None => {
                self.execute::<B, T>(Method::POST, endpoint, RequestBody::Empty, config)
                    .await
            }
        }
    }

    pub async fn put<B, T>(
        &self,
        endpoint: &str,
        body: Option<&B>,
        config: Option<RequestConfig>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        match body {
            Some(json) => {
                self.execute(Method::PUT, endpoint, RequestBody::Json(json), config)
                    .await
            }
            None => {
                self.execute::<B, T>(Method::PUT, endpoint, RequestBody::Empty, config)
                    .await
            }
        }
    }

    pub async fn patch<B, T>(
        &self,
        endpoint: &str,
        body: Option<&B>,
        config: Option<RequestConfig>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        match body {
            Some(json) => {
                self.execute(Method::PATCH, endpoint, RequestBody::Json(json), config)
                    .await
            }
            None => {
                self.execute::<B, T>(Method::PATCH, endpoint, RequestBody::Empty, config)
                    .await
            }
        }
    }

    pub async fn delete<T>(
        &self,
        endpoint: &str,
        config: Option<RequestConfig>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        self.execute::<Value, T>(Method::DELETE, endpoint, RequestBody::Empty, config)
            .await
    }

    /// Multipart upload. No explicit Content-Type is set so the transport can
    /// pick its own boundary.
    pub async fn upload<T>(
        &self,
        endpoint: &str,
        payload: &UploadPayload,
        config: Option<RequestConfig>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        self.execute::<Value, T>(Method::POST, endpoint, RequestBody::Multipart(payload), config)
            .await
    }

    /// Core executor: attempt loop with linear backoff.
    ///
    /// Attempts `0..=retries`. Any failure on a non-final attempt — transport
    /// error, per-attempt timeout, non-2xx status, undecodable body — is
    /// swallowed, followed by a `retry_delay × (attempt + 1)` wait. The final
    /// attempt's failure propagates as-is. Failures are retried uniformly: a
    /// 404 is retried exactly like a 503.
    async fn execute<B, T>(
        &self,
        method: Method,
        endpoint: &str,
        body: RequestBody<'_, B>,
        config: Option<RequestConfig>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let config = config.unwrap_or_default();
        let timeout = config.timeout.unwrap_or(self.defaults.timeout);
        let retries = config.retries.unwrap_or(self.defaults.retry_attempts);

        for attempt in 0..=retries {
            match self
                .attempt(method.clone(), endpoint, &body, &config, timeout)
                .await
            {
                Ok(value) => return Ok(value),
                Err(err) if attempt == retries => return Err(err),
                Err(err) => {
                    let delay = self.defaults.retry_delay * (attempt + 1);
                    log::debug!(
                        "request to {} failed ({}), retrying in {:?} (attempt {})",
                        endpoint,
                        err,
                        delay,
                        attempt + 1
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }

        // Unreachable when the loop runs at least once
        Err(ApiError::RetriesExhausted)
    }

    async fn attempt<B, T>(
        &self,
        method: Method,
        endpoint: &str,
        body: &RequestBody<'_, B>,
        config: &RequestConfig,
        timeout: Duration,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.build_request(method, endpoint).timeout(timeout);

        // JSON content type by default; multipart sets its own boundary
        request = match body {
            RequestBody::Empty => {
                request.header(reqwest::header::CONTENT_TYPE, "application/json")
            }
            RequestBody::Json(json) => request.json(json),
            RequestBody::Multipart(payload) => request.multipart(payload.to_form()?),
        };

        for (name, value) in &config.headers {
            request = request.header(name, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| transport_error(e, endpoint))?;
        let status = response.status();

        if !status.is_success() {
            // Tolerate an unparseable error body by substituting an empty object
            let body: Value = response
                .json()
                .await
                .unwrap_or_else(|_| Value::Object(Default::default()));
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            let errors = body
                .get("errors")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();

            return Err(ApiError::Http {
                status: status.as_u16(),
                message,
                errors,
            });
        }

        response.json::<T>().await.map_err(|e| ApiError::Network {
            message: format!("Failed to parse response: {}", e),
        })
    }
}

fn transport_error(err: reqwest::Error, endpoint: &str) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout {
            endpoint: endpoint.to_string(),
        }
    } else {
        ApiError::Network {
            message: err.to_string(),
        }
    }
}
