//! Error type for `sante-client`.

use reqwest::StatusCode;
use sante_core::envelope::ApiErrorBody;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The backend answered with a non-success status. Displays as the
  /// backend's `message`, or `HTTP <status>` when it sent none.
  #[error("{message}")]
  Http {
    status:  StatusCode,
    message: String,
    /// The decoded error payload, if the body was one.
    body:    Option<ApiErrorBody>,
  },

  /// Connection, TLS or protocol failure below HTTP semantics.
  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),

  /// A success body that does not match the expected shape.
  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("token storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// The HTTP status for [`Error::Http`], `None` otherwise.
  pub fn status(&self) -> Option<StatusCode> {
    match self {
      Self::Http { status, .. } => Some(*status),
      _ => None,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
