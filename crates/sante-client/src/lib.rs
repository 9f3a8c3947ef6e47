//! Typed async client for the Santé et Travail REST backend.
//!
//! [`ApiClient`] is an explicit session object: it owns the bearer token and
//! mirrors it into a [`KeyValueStore`](sante_core::storage::KeyValueStore).
//! Resource groups are borrowed views over the client:
//!
//! ```rust,ignore
//! let client = ApiClient::new(ApiConfig::default(), Arc::new(store)).await?;
//! client.auth().login(&credentials).await?;
//! let page = client.organizations().get_paged(&PageRequest::by_name()).await?;
//! ```

mod client;
pub mod error;
pub mod resources;

pub use client::{ApiClient, ApiConfig, DEFAULT_BASE_URL};
pub use error::{Error, Result};

#[cfg(test)]
mod tests;
