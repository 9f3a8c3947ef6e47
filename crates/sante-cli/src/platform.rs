//! Terminal colour-scheme detection.

use sante_core::theme::ColorSchemePreference;

/// Reads the `COLORFGBG` convention (`"fg;bg"` or `"fg;default;bg"`) set by
/// rxvt, Konsole, iTerm2 and others. Without it the terminal is assumed to
/// report no dark preference.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalColorScheme;

impl ColorSchemePreference for TerminalColorScheme {
  fn prefers_dark(&self) -> bool {
    std::env::var("COLORFGBG")
      .ok()
      .and_then(|v| dark_background(&v))
      .unwrap_or(false)
  }
}

/// ANSI backgrounds 0–6 and 8 are dark; 7 and 9–15 are light.
fn dark_background(colorfgbg: &str) -> Option<bool> {
  let bg: u8 = colorfgbg.rsplit(';').next()?.trim().parse().ok()?;
  Some(bg <= 6 || bg == 8)
}
