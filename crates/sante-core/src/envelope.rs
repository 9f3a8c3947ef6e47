//! Response envelopes shared by every resource group.

use serde::{Deserialize, Serialize};

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
  pub content: Vec<T>,
  pub page:    PageMeta,
}

/// Position of a [`Page`] within the full result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
  pub size:           u32,
  /// Zero-based index of this page.
  pub number:         u32,
  pub total_elements: u64,
  pub total_pages:    u32,
}

impl PageMeta {
  pub fn has_next(&self) -> bool { self.number.saturating_add(1) < self.total_pages }
}

/// Error payload returned with every non-success status.
///
/// All fields are optional on the wire: a proxy or a crashed handler may
/// answer with only part of it, or none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
  #[serde(default)]
  pub message:   Option<String>,
  #[serde(default)]
  pub status:    Option<u16>,
  #[serde(default)]
  pub timestamp: Option<String>,
  #[serde(default)]
  pub path:      Option<String>,
}
