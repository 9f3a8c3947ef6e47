//! Error types for `sante-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("sort descriptor has an empty field name: {0:?}")]
  EmptySortField(String),

  #[error("invalid sort field {0:?}: only letters, digits, '_' and '.' are allowed")]
  InvalidSortField(String),

  #[error("unknown sort direction {0:?}: expected \"asc\" or \"desc\"")]
  UnknownSortDirection(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
