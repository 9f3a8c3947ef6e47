//! The session-holding HTTP client and its generic request path.

use std::{
  sync::{Arc, PoisonError, RwLock},
  time::Duration,
};

use reqwest::{
  Client, Method, RequestBuilder,
  header::{CONTENT_TYPE, HeaderValue},
};
use sante_core::{
  envelope::ApiErrorBody,
  storage::{AUTH_TOKEN_KEY, KeyValueStore},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{Error, Result};

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Connection settings for the backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  /// Prefix for every request path, e.g. `http://localhost:8080/api`.
  pub base_url: String,
  /// Whole-request timeout. `None` lets a hung request wait indefinitely.
  pub timeout:  Option<Duration>,
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self { base_url: DEFAULT_BASE_URL.to_string(), timeout: None }
  }
}

/// Async HTTP client for the backend's JSON REST API.
///
/// Cheap to clone. Clones share the HTTP connection pool, the token and the
/// storage; a separately constructed client is an independent session.
pub struct ApiClient<S> {
  http:     Client,
  base_url: String,
  token:    Arc<RwLock<Option<String>>>,
  storage:  Arc<S>,
}

impl<S> Clone for ApiClient<S> {
  fn clone(&self) -> Self {
    Self {
      http:     self.http.clone(),
      base_url: self.base_url.clone(),
      token:    Arc::clone(&self.token),
      storage:  Arc::clone(&self.storage),
    }
  }
}

impl<S: KeyValueStore> ApiClient<S> {
  /// Build a client and pick up any token left in `storage` by a previous
  /// session. A failing read is logged and the client starts signed out.
  pub async fn new(config: ApiConfig, storage: Arc<S>) -> Result<Self> {
    let mut builder = Client::builder();
    if let Some(timeout) = config.timeout {
      builder = builder.timeout(timeout);
    }
    let http = builder.build()?;

    let token = match storage.get(AUTH_TOKEN_KEY).await {
      Ok(token) => token.filter(|t| !t.is_empty()),
      Err(e) => {
        tracing::warn!(error = %e, "could not read stored token; starting signed out");
        None
      }
    };

    Ok(Self {
      http,
      base_url: config.base_url.trim_end_matches('/').to_string(),
      token: Arc::new(RwLock::new(token)),
      storage,
    })
  }

  pub fn base_url(&self) -> &str { &self.base_url }

  /// The bearer token currently attached to requests.
  pub fn token(&self) -> Option<String> {
    self
      .token
      .read()
      .unwrap_or_else(PoisonError::into_inner)
      .clone()
  }

  pub fn is_authenticated(&self) -> bool { self.token().is_some() }

  /// Replace the in-memory token, then persist it.
  ///
  /// The new token is used by subsequent requests even if persisting fails.
  pub async fn set_token(&self, token: impl Into<String>) -> Result<()> {
    let token = token.into();
    *self.token.write().unwrap_or_else(PoisonError::into_inner) =
      Some(token.clone());
    self
      .storage
      .set(AUTH_TOKEN_KEY, &token)
      .await
      .map_err(|e| Error::Storage(Box::new(e)))
  }

  /// Forget the in-memory token, then remove it from storage.
  pub async fn clear_token(&self) -> Result<()> {
    *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    self
      .storage
      .remove(AUTH_TOKEN_KEY)
      .await
      .map_err(|e| Error::Storage(Box::new(e)))
  }

  fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }

  // ── Generic request ───────────────────────────────────────────────────────

  /// Issue `method path` with an optional JSON body.
  ///
  /// Returns the decoded JSON on success, or an empty object when the
  /// response is not declared as JSON. Failures are logged and returned;
  /// nothing is retried.
  pub async fn request<B>(
    &self,
    method: Method,
    path: &str,
    body: Option<&B>,
  ) -> Result<Value>
  where
    B: Serialize + ?Sized,
  {
    let mut req = self
      .http
      .request(method.clone(), self.url(path))
      .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(token) = self.token() {
      req = req.bearer_auth(token);
    }
    if let Some(body) = body {
      req = req.json(body);
    }

    let result = execute(req).await;
    if let Err(e) = &result {
      tracing::error!(%method, path, error = %e, "API request failed");
    }
    result
  }

  // ── Verb helpers ──────────────────────────────────────────────────────────

  pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
    decode(self.request::<()>(Method::GET, path, None).await?)
  }

  pub async fn post<T, B>(&self, path: &str, body: Option<&B>) -> Result<T>
  where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
  {
    decode(self.request(Method::POST, path, body).await?)
  }

  pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
  where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
  {
    decode(self.request(Method::PUT, path, Some(body)).await?)
  }

  pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
    decode(self.request::<()>(Method::DELETE, path, None).await?)
  }
}

async fn execute(req: RequestBuilder) -> Result<Value> {
  let resp = req.send().await?;
  let status = resp.status();

  if !status.is_success() {
    let bytes = resp.bytes().await?;
    // An unparseable error body counts as one without a message.
    let body = serde_json::from_slice::<ApiErrorBody>(&bytes).ok();
    let message = body
      .as_ref()
      .and_then(|b| b.message.clone())
      .filter(|m| !m.is_empty())
      .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
    return Err(Error::Http { status, message, body });
  }

  let is_json = resp
    .headers()
    .get(CONTENT_TYPE)
    .and_then(|v| v.to_str().ok())
    .is_some_and(|ct| ct.contains("application/json"));
  if !is_json {
    return Ok(Value::Object(serde_json::Map::new()));
  }

  let bytes = resp.bytes().await?;
  Ok(serde_json::from_slice(&bytes)?)
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
  Ok(serde_json::from_value(value)?)
}
