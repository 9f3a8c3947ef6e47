//! The durable key/value capability used for client-side state.
//!
//! The client persists exactly two things: the bearer token and the display
//! theme. Backends implement [`KeyValueStore`] (e.g. `sante-store-sqlite`);
//! [`MemoryStore`] covers tests and runs that should leave nothing behind.

use std::{
  collections::HashMap,
  convert::Infallible,
  future::Future,
  sync::{Arc, Mutex, PoisonError},
};

/// Key holding the current bearer token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Key holding the display theme (`"dark"` or `"light"`).
pub const THEME_KEY: &str = "theme";

/// Get/set/remove access to string values that outlive the process.
///
/// All methods return `Send` futures so implementations can be driven from a
/// multi-threaded tokio runtime.
pub trait KeyValueStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read `key`. Returns `None` if it was never set or has been removed.
  fn get<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send + 'a;

  /// Insert or overwrite `key`.
  fn set<'a>(
    &'a self,
    key: &'a str,
    value: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Delete `key`. Removing a missing key is not an error.
  fn remove<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}

/// In-process store. Clones share the same map, which lets a test hand one
/// "browser profile" to several clients.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  /// A store pre-populated with `entries`.
  pub fn with_entries<I, K, V>(entries: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    let map = entries
      .into_iter()
      .map(|(k, v)| (k.into(), v.into()))
      .collect();
    Self { entries: Arc::new(Mutex::new(map)) }
  }

  fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
    self.entries.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl KeyValueStore for MemoryStore {
  type Error = Infallible;

  async fn get(&self, key: &str) -> Result<Option<String>, Infallible> {
    Ok(self.lock().get(key).cloned())
  }

  async fn set(&self, key: &str, value: &str) -> Result<(), Infallible> {
    self.lock().insert(key.to_string(), value.to_string());
    Ok(())
  }

  async fn remove(&self, key: &str) -> Result<(), Infallible> {
    self.lock().remove(key);
    Ok(())
  }
}
