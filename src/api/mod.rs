//! BuddyScript API client
//!
//! This module owns everything that talks HTTP: the request plumbing with
//! bearer authentication and transparent token refresh, the payload models,
//! and the typed endpoint wrappers grouped by resource.
//!
//! # Token refresh
//!
//! Every authenticated call goes through [`ApiClient::execute`], which
//! attaches the stored access token and intercepts a 401 response: the
//! stored refresh token is exchanged for a new access token and the original
//! request is replayed exactly once. Concurrent requests that hit a 401
//! around the same time coalesce into a single refresh exchange. When the
//! exchange itself fails the stored credentials are erased and the caller
//! receives [`ApiError::SessionExpired`], which the UI treats as a forced
//! return to the login screen.

pub mod auth;
pub mod comments;
pub mod error;
pub mod friends;
pub mod models;
pub mod posts;

pub use error::ApiError;
pub use posts::NewPost;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::credentials::CredentialStore;
use models::{RefreshRequest, RefreshResponse};

/// Base URL of a locally running API gateway
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Default timeout for API requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Request body variants.
///
/// Multipart fields keep their raw bytes so a replay after a token refresh
/// can rebuild the form instead of cloning a consumed stream.
#[derive(Debug, Clone)]
pub(crate) enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<MultipartField>),
}

#[derive(Debug, Clone)]
pub(crate) struct MultipartField {
    pub name: String,
    pub value: MultipartValue,
}

#[derive(Debug, Clone)]
pub(crate) enum MultipartValue {
    Text(String),
    File {
        file_name: String,
        mime: String,
        bytes: Vec<u8>,
    },
}

/// An outgoing request, described independently of the HTTP machinery.
///
/// Descriptors are ephemeral and rebuilt into a fresh `reqwest` request on
/// every attempt, which is what makes the single post-refresh replay cheap.
#[derive(Debug, Clone)]
pub(crate) struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn json<T: Serialize>(mut self, payload: &T) -> Self {
        // Serialization of our own payload types cannot fail
        self.body = RequestBody::Json(serde_json::to_value(payload).expect("serializable payload"));
        self
    }

    pub fn multipart(mut self, fields: Vec<MultipartField>) -> Self {
        self.body = RequestBody::Multipart(fields);
        self
    }
}

/// Authenticated API client shared by every screen.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Arc<dyn CredentialStore>,
    /// Gates the refresh exchange so concurrent 401s coalesce into one
    refresh_gate: Mutex<()>,
}

impl ApiClient {
    /// Create a client against `base_url` with the given credential store.
    pub fn new(base_url: impl Into<String>, timeout: Duration, credentials: Arc<dyn CredentialStore>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
            refresh_gate: Mutex::new(()),
        }
    }

    /// The credential store this client reads tokens from.
    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Build and send one attempt of a request.
    async fn dispatch(&self, request: &ApiRequest, bearer: Option<&str>) -> Result<reqwest::Response, ApiError> {
        let mut builder = self
            .http
            .request(request.method.clone(), self.endpoint_url(&request.path));
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }
        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart(fields) => builder.multipart(Self::build_form(fields)?),
        };
        Ok(builder.send().await?)
    }

    fn build_form(fields: &[MultipartField]) -> Result<reqwest::multipart::Form, ApiError> {
        let mut form = reqwest::multipart::Form::new();
        for field in fields {
            form = match &field.value {
                MultipartValue::Text(text) => form.text(field.name.clone(), text.clone()),
                MultipartValue::File { file_name, mime, bytes } => {
                    let part = reqwest::multipart::Part::bytes(bytes.clone())
                        .file_name(file_name.clone())
                        .mime_str(mime)?;
                    form.part(field.name.clone(), part)
                }
            };
        }
        Ok(form)
    }

    /// Send an authenticated request, recovering from access-token expiry
    /// exactly once.
    ///
    /// A 401 on the first attempt triggers the refresh path; the replayed
    /// request is terminal either way, so a second 401 surfaces to the
    /// caller without another exchange.
    pub(crate) async fn execute(&self, request: &ApiRequest) -> Result<reqwest::Response, ApiError> {
        let access = self.credentials.access_token();
        let response = self.dispatch(request, access.as_deref()).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        let fresh = match self.refresh_access_token(access.as_deref().unwrap_or_default()).await {
            Ok(token) => token,
            Err(ApiError::Storage(err)) => return Err(ApiError::Storage(err)),
            Err(_) => {
                // Refresh failures are terminal for the session
                self.credentials.clear().map_err(ApiError::Storage)?;
                log::warn!("token refresh failed, session cleared");
                return Err(ApiError::SessionExpired);
            }
        };

        self.dispatch(request, Some(&fresh)).await
    }

    /// Exchange the stored refresh token for a new access token.
    ///
    /// The gate serializes concurrent exchanges; whoever acquires it second
    /// finds the store already carrying a token that differs from the one
    /// its failed request used, and adopts it instead of hitting the
    /// endpoint again.
    async fn refresh_access_token(&self, stale_access: &str) -> Result<String, ApiError> {
        let _gate = self.refresh_gate.lock().await;

        if let Some(current) = self.credentials.access_token() {
            if current != stale_access {
                return Ok(current);
            }
        }

        let refresh = self.credentials.refresh_token().ok_or(ApiError::SessionExpired)?;
        let response = self
            .http
            .post(self.endpoint_url("auth/token/refresh/"))
            .json(&RefreshRequest { refresh })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Unauthorized);
        }
        let minted: RefreshResponse = response.json().await?;
        self.credentials
            .store_access_token(&minted.access)
            .map_err(ApiError::Storage)?;
        log::info!("access token refreshed");
        Ok(minted.access)
    }

    /// Execute and deserialize a JSON response.
    pub(crate) async fn expect_json<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T, ApiError> {
        let response = self.execute(request).await?;
        let response = Self::check_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Execute a request where only success matters.
    pub(crate) async fn expect_ok(&self, request: &ApiRequest) -> Result<(), ApiError> {
        let response = self.execute(request).await?;
        Self::check_status(response).await.map(|_| ())
    }

    /// Execute an unauthenticated request (login, register).
    ///
    /// Bypasses the refresh interception: a 401 here means bad credentials,
    /// not an expired access token, and must reach the form as-is.
    pub(crate) async fn expect_json_public<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T, ApiError> {
        let response = self.dispatch(request, None).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }
        let body = response.text().await.unwrap_or_default();
        Err(Self::error_from_body(status.as_u16(), &body))
    }

    /// Map a non-success response to the error taxonomy.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        let body = response.text().await.unwrap_or_default();
        Err(Self::error_from_body(status.as_u16(), &body))
    }

    fn error_from_body(status: u16, body: &str) -> ApiError {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
            // Single-message envelopes the server uses for business errors
            if let Some(message) = value
                .get("error")
                .and_then(|v| v.as_str())
                .or_else(|| value.get("detail").and_then(|v| v.as_str()))
            {
                return ApiError::Api {
                    status,
                    message: message.to_string(),
                };
            }
            // Field-level validation messages: {"field": ["msg", ...]}
            if status == 400 {
                if let Some(map) = value.as_object() {
                    let mut fields = BTreeMap::new();
                    for (field, messages) in map {
                        let collected: Vec<String> = match messages {
                            serde_json::Value::Array(items) => items
                                .iter()
                                .filter_map(|item| item.as_str().map(str::to_string))
                                .collect(),
                            serde_json::Value::String(message) => vec![message.clone()],
                            _ => Vec::new(),
                        };
                        if !collected.is_empty() {
                            fields.insert(field.clone(), collected);
                        }
                    }
                    if !fields.is_empty() {
                        return ApiError::Validation(fields);
                    }
                }
            }
        }
        let message = if body.is_empty() {
            StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("request failed")
                .to_string()
        } else {
            body.chars().take(200).collect()
        };
        ApiError::Api { status, message }
    }
}
