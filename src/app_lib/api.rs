//! HTTP wrapper for the project API with a consistent timeout, a cookie-backed
//! session and uniform logging. Feature clients go through [`ApiClient`] so
//! every request is built, logged and mapped to [`AppError`] the same way.
//!
//! Response bodies are returned as opaque JSON: an empty body decodes to
//! `null` and a non-JSON body is handed back as a JSON string. Shapes are the
//! concern of the caller.

use super::{config::AppConfig, errors::AppError};
use reqwest::{
    Client, Method, RequestBuilder, Response,
    header::{CONTENT_TYPE, HeaderValue},
    multipart::Form,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};
use url::Url;

/// Maximum number of error body characters surfaced to callers.
const MAX_ERROR_CHARS: usize = 200;

/// Verb-generic client bound to one API base URL.
///
/// Cloning is cheap and clones share the connection pool and the cookie jar,
/// so the session cookie set by a login is replayed by every clone.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client for `config.api_base_url`.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the base URL is missing or not an absolute
    /// `http(s)` URL, or if the underlying HTTP client cannot be created.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let base_url = validate_base_url(&config.api_base_url)?;

        let client = Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .cookie_store(true)
            .timeout(config.timeout)
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a GET with optional query parameters.
    ///
    /// # Errors
    /// Returns an `AppError` on transport failure, timeout or a non-2xx status.
    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, AppError> {
        self.send(Method::GET, path, |builder| builder.query(query))
            .await
    }

    /// Sends a POST with a JSON body.
    ///
    /// # Errors
    /// Returns an `AppError` if the body cannot be encoded or the request fails.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, AppError> {
        let payload = encode_body(body)?;
        self.send(Method::POST, path, |builder| with_json(builder, payload))
            .await
    }

    /// Sends a POST without a body, used for session endpoints.
    ///
    /// # Errors
    /// Returns an `AppError` on transport failure, timeout or a non-2xx status.
    pub async fn post_empty(&self, path: &str) -> Result<Value, AppError> {
        self.send(Method::POST, path, |builder| builder).await
    }

    /// Sends a PUT with a JSON body.
    ///
    /// # Errors
    /// Returns an `AppError` if the body cannot be encoded or the request fails.
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, AppError> {
        let payload = encode_body(body)?;
        self.send(Method::PUT, path, |builder| with_json(builder, payload))
            .await
    }

    /// Sends a DELETE.
    ///
    /// # Errors
    /// Returns an `AppError` on transport failure, timeout or a non-2xx status.
    pub async fn delete(&self, path: &str) -> Result<Value, AppError> {
        self.send(Method::DELETE, path, |builder| builder).await
    }

    /// Sends a POST with a `multipart/form-data` body.
    ///
    /// # Errors
    /// Returns an `AppError` on transport failure, timeout or a non-2xx status.
    pub async fn post_multipart(&self, path: &str, form: Form) -> Result<Value, AppError> {
        self.send(Method::POST, path, |builder| builder.multipart(form))
            .await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        build_request: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<Value, AppError> {
        let url = build_url_with_base(&self.base_url, path);
        debug!(method = %method, url = %url, "Making request");

        let builder = build_request(self.client.request(method.clone(), &url));
        let result = match builder.send().await {
            Ok(response) => handle_response(response).await,
            Err(err) => Err(map_request_error(&err)),
        };

        result.inspect_err(|err| error!(method = %method, url = %url, error = %err, "API error"))
    }
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn validate_base_url(base_url: &str) -> Result<String, AppError> {
    let trimmed = base_url.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("API base URL is not configured.".to_string()));
    }

    let url = Url::parse(trimmed)
        .map_err(|err| AppError::Config(format!("Invalid API base URL {trimmed}: {err}")))?;

    match url.scheme() {
        "http" | "https" => Ok(trimmed.trim_end_matches('/').to_string()),
        scheme => Err(AppError::Config(format!(
            "Unsupported API base URL scheme: {scheme}"
        ))),
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<String, AppError> {
    serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))
}

fn with_json(builder: RequestBuilder, payload: String) -> RequestBuilder {
    builder
        .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .body(payload)
}

/// Maps transport errors into `AppError` variants with timeout detection.
fn map_request_error(err: &reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        AppError::Config(format!("Failed to build request: {err}"))
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Decodes 2xx bodies and surfaces HTTP errors with sanitized bodies.
async fn handle_response(response: Response) -> Result<Value, AppError> {
    let status = response.status();
    let body = response.text().await.map_err(|err| map_request_error(&err))?;

    if status.is_success() {
        Ok(decode_body(&body))
    } else {
        Err(AppError::Http {
            status: status.as_u16(),
            message: sanitize_body(&body),
        })
    }
}

fn decode_body(body: &str) -> Value {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(trimmed.to_string()))
}

/// Sanitizes HTTP error bodies by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
