use std::collections::HashMap;
use std::sync::Arc;

use http::Method;
use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::response::ApiResponse;

/// Shared transport for all domain services.
///
/// Owns the base URL, the underlying HTTP client and the current bearer
/// token. Cloning is cheap; clones share the same token cell, so a set of
/// services built over clones of one `ApiClient` form a single session, while
/// two separately constructed clients are fully isolated.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    token: Arc<RwLock<Option<String>>>,
}

/// Request payload handed to the send routine. JSON and multipart flow
/// through the same path so both get identical normalization.
enum Payload {
    Empty,
    Json(Vec<u8>),
    Multipart(reqwest::multipart::Form),
}

impl Payload {
    fn json<B: Serialize + ?Sized>(body: &B) -> Result<Self, ApiError> {
        let bytes = serde_json::to_vec(body)
            .map_err(|e| ApiError::Build(format!("serialize request body: {e}")))?;
        Ok(Payload::Json(bytes))
    }
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Build(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url,
            http,
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Build a client from [`ApiConfig::from_env`].
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ApiConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the session token. Affects subsequent calls only; a request
    /// already in flight keeps the token it was sent with.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.write() = token;
    }

    /// Current session token, if one is set.
    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ApiError> {
        self.send(Method::GET, path, Payload::Empty).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, Payload::json(body)?).await
    }

    /// POST without a request body.
    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<ApiResponse<T>, ApiError> {
        self.send(Method::POST, path, Payload::Empty).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(Method::PUT, path, Payload::json(body)?).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<ApiResponse<T>, ApiError> {
        self.send(Method::DELETE, path, Payload::Empty).await
    }

    /// POST a multipart form through the same normalization pipeline as the
    /// JSON verbs. `Content-Type` is left unset here so the transport fills
    /// in the multipart boundary.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<ApiResponse<T>, ApiError> {
        self.send(Method::POST, path, Payload::Multipart(form)).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
    ) -> Result<ApiResponse<T>, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.http.request(method.clone(), &url);

        // Token is read once per request, at send time.
        if let Some(token) = self.token.read().as_deref() {
            request = request.bearer_auth(token);
        }

        // Every request declares JSON except multipart, where the header is
        // left to the transport so the boundary parameter is filled in.
        request = match payload {
            Payload::Empty => request.header(http::header::CONTENT_TYPE, "application/json"),
            Payload::Json(bytes) => request
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(bytes),
            Payload::Multipart(form) => request.multipart(form),
        };

        tracing::debug!(%method, %url, "sending request");

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport_error)?;

        let parsed: Value =
            serde_json::from_slice(&body).map_err(|e| ApiError::Parse(e.to_string()))?;

        if !(200..300).contains(&status) {
            tracing::warn!(%url, status, "request failed");
            return Err(error_from_body(status, &parsed));
        }

        let message = parsed
            .get("message")
            .and_then(Value::as_str)
            .map(ToOwned::to_owned);

        // Endpoints wrap payloads inconsistently; prefer the `data` field
        // when the body carries one, else take the whole body.
        let payload = match parsed {
            Value::Object(mut map) => match map.remove("data") {
                Some(data) => data,
                None => Value::Object(map),
            },
            other => other,
        };

        let data = serde_json::from_value(payload).map_err(|e| ApiError::Parse(e.to_string()))?;

        Ok(ApiResponse {
            data,
            message,
            status,
        })
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("token", &self.token.read().as_ref().map(|_| "<set>"))
            .finish_non_exhaustive()
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout(e.to_string())
    } else {
        ApiError::Connection(e.to_string())
    }
}

/// Normalize a non-2xx body into [`ApiError::Api`], preferring the server's
/// own message.
fn error_from_body(status: u16, body: &Value) -> ApiError {
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("request failed")
        .to_owned();
    let errors = body
        .get("errors")
        .and_then(|v| serde_json::from_value::<HashMap<String, Vec<String>>>(v.clone()).ok());
    ApiError::Api {
        status,
        message,
        errors,
    }
}
