//! TUI rendering: header, body panes and status bar.

pub mod landing;
pub mod login;
pub mod organization_detail;
pub mod organization_list;
pub mod palette;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};
use sante_core::storage::KeyValueStore;

use crate::app::{App, Screen};
use palette::Palette;

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw<S: KeyValueStore>(f: &mut Frame, app: &App<S>) {
  let area = f.area();
  let palette = Palette::for_dark(app.is_dark());

  f.render_widget(Block::default().style(palette.base()), area);

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0], app, &palette);
  draw_body(f, rows[1], app, &palette);
  draw_status(f, rows[2], app, &palette);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header<S: KeyValueStore>(f: &mut Frame, area: Rect, app: &App<S>, palette: &Palette) {
  let date = Local::now().format("%d/%m/%Y").to_string();
  let session = match (&app.signed_in_as, app.client.is_authenticated()) {
    (Some(name), _) => name.clone(),
    (None, true) => "session ouverte".to_string(),
    (None, false) => "non connecté".to_string(),
  };

  let left = Span::styled(
    " Santé et Travail  [t] thème  [q] quitter",
    Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(format!("{session} · {date} "), palette.muted());

  // Simple left-right header: pad the middle.
  let left_width = left.width() as u16;
  let right_width = right.width() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![
    left,
    Span::raw(" ".repeat(pad as usize)),
    right,
  ]);

  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(palette.bar_bg)),
    area,
  );
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body<S: KeyValueStore>(f: &mut Frame, area: Rect, app: &App<S>, palette: &Palette) {
  match app.screen {
    Screen::Landing => landing::draw(f, area, palette),
    Screen::Login => login::draw(f, area, app, palette),
    Screen::Organizations | Screen::OrganizationDetail => {
      // Split into left list pane (35%) and right detail pane (65%).
      let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

      organization_list::draw(f, cols[0], app, palette);
      if app.selected.is_some() {
        organization_detail::draw(f, cols[1], app, palette);
      } else {
        draw_empty_detail(f, cols[1], palette);
      }
    }
  }
}

fn draw_empty_detail(f: &mut Frame, area: Rect, palette: &Palette) {
  let block = Block::default()
    .title(" Détail ")
    .borders(Borders::ALL)
    .border_style(palette.border());
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(
    Paragraph::new("Sélectionnez une organisation et appuyez sur Entrée.")
      .style(palette.muted()),
    inner,
  );
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status<S: KeyValueStore>(f: &mut Frame, area: Rect, app: &App<S>, palette: &Palette) {
  let (mode_label, hints) = match app.screen {
    Screen::Landing => (
      "ACCUEIL",
      "Entrée commencer  o tableau de bord  x déconnexion  q quitter",
    ),
    Screen::Login => ("CONNEXION", "Tab champ suivant  Entrée valider  Esc retour"),
    Screen::Organizations if app.filter_active => (
      "RECHERCHE",
      "Tapez pour filtrer  Esc annuler  Entrée sélectionner",
    ),
    Screen::Organizations => (
      "LISTE",
      "↑↓/jk naviguer  / rechercher  Entrée détail  n/p page  r recharger  Esc retour",
    ),
    Screen::OrganizationDetail => (
      "DÉTAIL",
      "↑↓/jk défiler  [ précédente  ] suivante  Esc retour",
    ),
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(format!(" {mode_label} "), palette.cursor());
  let hint_span = Span::styled(format!("  {status}"), palette.muted());

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(Paragraph::new(line), area);
}
