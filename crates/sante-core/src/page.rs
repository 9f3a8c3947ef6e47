//! Page requests and the `field,direction` sort descriptor.
//!
//! The backend accepts sorting in two shapes depending on the resource:
//!
//! | Encoding | Query | Resources |
//! |----------|-------|-----------|
//! | [`SortEncoding::Combined`] | `sort=name,asc` | organizations, workstations |
//! | [`SortEncoding::Split`] | `sortBy=name&sortDirection=asc` | campaigns, employees |
//!
//! Both are kept so each resource group can speak its endpoint's dialect.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Sort ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
  #[default]
  Asc,
  Desc,
}

impl SortDirection {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Asc => "asc",
      Self::Desc => "desc",
    }
  }
}

impl FromStr for SortDirection {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "asc" => Ok(Self::Asc),
      "desc" => Ok(Self::Desc),
      _ => Err(Error::UnknownSortDirection(s.to_string())),
    }
  }
}

/// A sort descriptor, written `field,direction` on the command line and in
/// the combined query encoding. The direction defaults to ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
  field:     String,
  direction: SortDirection,
}

impl Sort {
  /// Build a descriptor from a known-good field name.
  ///
  /// Field names are interpolated into query strings verbatim, so they are
  /// restricted to `[A-Za-z0-9_.]`; use [`Sort::from_str`] for untrusted
  /// input.
  pub fn new(field: &str, direction: SortDirection) -> Result<Self> {
    if field.is_empty() {
      return Err(Error::EmptySortField(field.to_string()));
    }
    if !field
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
    {
      return Err(Error::InvalidSortField(field.to_string()));
    }
    Ok(Self { field: field.to_string(), direction })
  }

  pub(crate) fn asc_unchecked(field: &'static str) -> Self {
    Self { field: field.to_string(), direction: SortDirection::Asc }
  }

  pub fn field(&self) -> &str { &self.field }

  pub fn direction(&self) -> SortDirection { self.direction }

  /// The `field,direction` form.
  pub fn combined(&self) -> String {
    format!("{},{}", self.field, self.direction.as_str())
  }
}

impl fmt::Display for Sort {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{},{}", self.field, self.direction.as_str())
  }
}

impl FromStr for Sort {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let (field, direction) = match s.split_once(',') {
      Some((field, direction)) => (field.trim(), direction.trim()),
      None => (s.trim(), ""),
    };
    if field.is_empty() {
      return Err(Error::EmptySortField(s.to_string()));
    }
    let direction = if direction.is_empty() {
      SortDirection::Asc
    } else {
      direction.parse()?
    };
    Self::new(field, direction)
  }
}

// ─── Page request ────────────────────────────────────────────────────────────

/// How a [`PageRequest`]'s sort is rendered into the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortEncoding {
  /// `sort=field,direction`
  Combined,
  /// `sortBy=field&sortDirection=direction`
  Split,
}

/// Page index, page size and ordering for a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
  /// Zero-based page index.
  pub page: u32,
  pub size: u32,
  pub sort: Sort,
}

impl PageRequest {
  pub const DEFAULT_SIZE: u32 = 10;

  /// The first page of [`Self::DEFAULT_SIZE`] items, ordered by `sort`.
  pub fn first(sort: Sort) -> Self {
    Self { page: 0, size: Self::DEFAULT_SIZE, sort }
  }

  /// Default listing for organizations and campaigns: `name,asc`.
  pub fn by_name() -> Self { Self::first(Sort::asc_unchecked("name")) }

  /// Default listing for workstations: `title,asc`.
  pub fn by_title() -> Self { Self::first(Sort::asc_unchecked("title")) }

  /// Default listing for employees: `familyName,asc`.
  pub fn by_family_name() -> Self {
    Self::first(Sort::asc_unchecked("familyName"))
  }

  pub fn with_page(mut self, page: u32) -> Self {
    self.page = page;
    self
  }

  pub fn with_size(mut self, size: u32) -> Self {
    self.size = size;
    self
  }

  /// Render as a query string (without the leading `?`).
  pub fn query(&self, encoding: SortEncoding) -> String {
    match encoding {
      SortEncoding::Combined => format!(
        "page={}&size={}&sort={}",
        self.page,
        self.size,
        self.sort.combined()
      ),
      SortEncoding::Split => format!(
        "page={}&size={}&sortBy={}&sortDirection={}",
        self.page,
        self.size,
        self.sort.field(),
        self.sort.direction().as_str()
      ),
    }
  }
}
