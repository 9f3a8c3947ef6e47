//! Light and dark colour sets.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Palette {
  pub bg:        Color,
  pub fg:        Color,
  pub muted:     Color,
  pub accent:    Color,
  pub border:    Color,
  pub bar_bg:    Color,
  pub cursor_bg: Color,
  pub cursor_fg: Color,
  pub warn:      Color,
}

pub const LIGHT: Palette = Palette {
  bg:        Color::Reset,
  fg:        Color::Black,
  muted:     Color::DarkGray,
  accent:    Color::Blue,
  border:    Color::Gray,
  bar_bg:    Color::Gray,
  cursor_bg: Color::Blue,
  cursor_fg: Color::White,
  warn:      Color::Red,
};

pub const DARK: Palette = Palette {
  bg:        Color::Black,
  fg:        Color::White,
  muted:     Color::Gray,
  accent:    Color::LightBlue,
  border:    Color::DarkGray,
  bar_bg:    Color::DarkGray,
  cursor_bg: Color::LightBlue,
  cursor_fg: Color::Black,
  warn:      Color::LightRed,
};

impl Palette {
  pub fn for_dark(dark: bool) -> Self { if dark { DARK } else { LIGHT } }

  pub fn base(&self) -> Style { Style::default().fg(self.fg).bg(self.bg) }

  pub fn muted(&self) -> Style { Style::default().fg(self.muted) }

  pub fn border(&self) -> Style { Style::default().fg(self.border) }

  pub fn title(&self) -> Style {
    Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
  }

  pub fn cursor(&self) -> Style {
    Style::default()
      .bg(self.cursor_bg)
      .fg(self.cursor_fg)
      .add_modifier(Modifier::BOLD)
  }
}
