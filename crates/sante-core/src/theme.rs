//! Light/dark display preference.
//!
//! The preference is applied as the presence or absence of the `dark` class
//! on the front end's root element and persisted under
//! [`THEME_KEY`](crate::storage::THEME_KEY). When nothing usable is stored,
//! the platform's reported colour scheme decides.

use std::{collections::BTreeSet, sync::Arc};

use crate::storage::{KeyValueStore, THEME_KEY};

/// Class toggled on the root element for the dark palette.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Light,
  Dark,
}

impl Theme {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Light => "light",
      Self::Dark => "dark",
    }
  }

  pub fn is_dark(self) -> bool { self == Self::Dark }

  pub fn toggled(self) -> Self {
    match self {
      Self::Light => Self::Dark,
      Self::Dark => Self::Light,
    }
  }

  /// Interpret a stored value. Only `"dark"` selects the dark theme; any
  /// other non-empty value reads as light. Empty means "no preference".
  pub fn from_stored(value: &str) -> Option<Self> {
    match value {
      "" => None,
      "dark" => Some(Self::Dark),
      _ => Some(Self::Light),
    }
  }
}

// ─── Platform seams ──────────────────────────────────────────────────────────

/// The platform's reported colour-scheme preference.
pub trait ColorSchemePreference {
  fn prefers_dark(&self) -> bool;
}

/// A preference fixed at construction, for tests and headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPreference(pub bool);

impl ColorSchemePreference for FixedPreference {
  fn prefers_dark(&self) -> bool { self.0 }
}

/// The class attribute of the front end's root element.
pub trait RootClasses {
  /// Force `class` to be present (`true`) or absent (`false`).
  fn set_class(&mut self, class: &str, present: bool);

  fn has_class(&self, class: &str) -> bool;
}

/// A plain ordered set of class names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(BTreeSet<String>);

impl ClassList {
  pub fn new() -> Self { Self::default() }

  /// Space-separated, as it would appear in a `class` attribute.
  pub fn attribute(&self) -> String {
    self.0.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
  }
}

impl RootClasses for ClassList {
  fn set_class(&mut self, class: &str, present: bool) {
    if present {
      self.0.insert(class.to_string());
    } else {
      self.0.remove(class);
    }
  }

  fn has_class(&self, class: &str) -> bool { self.0.contains(class) }
}

// ─── Toggle ──────────────────────────────────────────────────────────────────

/// Persisted binary theme switch.
pub struct ThemeToggle<S> {
  store: Arc<S>,
  theme: Theme,
}

impl<S: KeyValueStore> ThemeToggle<S> {
  /// Resolve the initial theme and apply it to `root`.
  ///
  /// Nothing is written to the store until the first [`toggle`](Self::toggle).
  pub async fn mount(
    store: Arc<S>,
    platform: &impl ColorSchemePreference,
    root: &mut impl RootClasses,
  ) -> Result<Self, S::Error> {
    let stored = store.get(THEME_KEY).await?;
    let theme = stored
      .as_deref()
      .and_then(Theme::from_stored)
      .unwrap_or_else(|| {
        if platform.prefers_dark() {
          Theme::Dark
        } else {
          Theme::Light
        }
      });
    root.set_class(DARK_CLASS, theme.is_dark());
    Ok(Self { store, theme })
  }

  pub fn theme(&self) -> Theme { self.theme }

  /// Flip the theme, re-apply it to `root`, and persist the new value.
  pub async fn toggle(
    &mut self,
    root: &mut impl RootClasses,
  ) -> Result<Theme, S::Error> {
    self.theme = self.theme.toggled();
    root.set_class(DARK_CLASS, self.theme.is_dark());
    self.store.set(THEME_KEY, self.theme.as_str()).await?;
    Ok(self.theme)
  }
}
