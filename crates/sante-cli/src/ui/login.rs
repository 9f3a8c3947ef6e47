//! Sign-in form.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Flex, Layout, Rect},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};
use sante_core::storage::KeyValueStore;

use super::palette::Palette;
use crate::app::{App, LoginField};

pub fn draw<S: KeyValueStore>(f: &mut Frame, area: Rect, app: &App<S>, palette: &Palette) {
  let [form_area] = Layout::horizontal([Constraint::Length(50)])
    .flex(Flex::Center)
    .areas(area);
  let [form_area] = Layout::vertical([Constraint::Length(9)])
    .flex(Flex::Center)
    .areas(form_area);

  let block = Block::default()
    .title(Span::styled(" Connexion ", palette.title()))
    .borders(Borders::ALL)
    .border_style(palette.border());
  let inner = block.inner(form_area);
  f.render_widget(block, form_area);

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1),
      Constraint::Length(3), // email
      Constraint::Length(3), // password
    ])
    .split(inner);

  let masked = "•".repeat(app.login.password.chars().count());
  draw_field(
    f,
    rows[1],
    "Email",
    &app.login.email,
    app.login.focus == LoginField::Email,
    palette,
  );
  draw_field(
    f,
    rows[2],
    "Mot de passe",
    &masked,
    app.login.focus == LoginField::Password,
    palette,
  );
}

fn draw_field(
  f: &mut Frame,
  area: Rect,
  label: &str,
  value: &str,
  focused: bool,
  palette: &Palette,
) {
  let border = if focused {
    palette.title()
  } else {
    palette.border()
  };
  let block = Block::default()
    .title(format!(" {label} "))
    .borders(Borders::ALL)
    .border_style(border);
  let text = if focused {
    format!("{value}_")
  } else {
    value.to_string()
  };
  f.render_widget(
    Paragraph::new(Line::from(text)).block(block),
    area,
  );
}
