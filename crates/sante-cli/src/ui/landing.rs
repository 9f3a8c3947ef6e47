//! Landing screen: hero, feature cards and system status.

use ratatui::{
  Frame,
  layout::{Alignment, Constraint, Direction, Layout, Rect},
  style::{Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};

use super::palette::Palette;

struct Feature {
  icon:    &'static str,
  title:   &'static str,
  tagline: &'static str,
  detail:  &'static str,
}

const FEATURES: [Feature; 6] = [
  Feature {
    icon:    "🏢",
    title:   "Organisations",
    tagline: "Gérer les profils d'entreprise et les structures organisationnelles",
    detail:  "Gestion complète des organisations avec suivi des adresses et associations de campagnes.",
  },
  Feature {
    icon:    "🎯",
    title:   "Campagnes",
    tagline: "Planifier et exécuter des campagnes de santé médicale",
    detail:  "Créer des campagnes de santé limitées dans le temps avec affectation d'employés et suivi des progrès.",
  },
  Feature {
    icon:    "👥",
    title:   "Employés",
    tagline: "Suivre la santé des employés et les dossiers médicaux",
    detail:  "Dossiers de santé des employés conformes FHIR avec intégration OpenMRS.",
  },
  Feature {
    icon:    "🔧",
    title:   "Postes de travail",
    tagline: "Gérer les environnements de travail et les risques",
    detail:  "Suivre les risques professionnels et les conditions de travail pour la santé au travail.",
  },
  Feature {
    icon:    "🔒",
    title:   "Sécurité",
    tagline: "Sécurité et conformité de niveau entreprise",
    detail:  "Authentification JWT, contrôle d'accès basé sur les rôles et conformité FHIR.",
  },
  Feature {
    icon:    "📊",
    title:   "Analyses",
    tagline: "Analyses de santé et rapports",
    detail:  "Bientôt disponible : analyses avancées et rapports de tendances de santé.",
  },
];

const BADGES: [&str; 3] = [
  "API Backend prête",
  "Frontend en développement",
  "Compatible FHIR",
];

/// Render the landing screen into `area`.
pub fn draw(f: &mut Frame, area: Rect, palette: &Palette) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(8), // hero
      Constraint::Min(0),    // feature grid
      Constraint::Length(3), // status badges
    ])
    .split(area);

  draw_hero(f, rows[0], palette);
  draw_features(f, rows[1], palette);
  draw_badges(f, rows[2], palette);
}

fn draw_hero(f: &mut Frame, area: Rect, palette: &Palette) {
  let lines = vec![
    Line::from(""),
    Line::from(Span::styled(
      "Cabinet Médical",
      Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
    )),
    Line::from(Span::styled("Santé et Travail", palette.title())),
    Line::from(Span::styled("Pour Tous", palette.muted())),
    Line::from(""),
    Line::from(Span::styled(
      "Plateforme moderne de gestion de la santé au travail pour les campagnes médicales, \
       le suivi de la santé des employés et les programmes de bien-être au travail.",
      palette.muted(),
    )),
    Line::from(vec![
      Span::styled(" [Entrée] Commencer ", palette.cursor()),
      Span::raw("   "),
      Span::styled(" [o] Voir le tableau de bord ", palette.border()),
    ]),
  ];
  f.render_widget(
    Paragraph::new(lines)
      .alignment(Alignment::Center)
      .wrap(Wrap { trim: true }),
    area,
  );
}

/// Three cards per row, two rows.
fn draw_features(f: &mut Frame, area: Rect, palette: &Palette) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
    .split(area);

  for (row, chunk) in rows.iter().zip(FEATURES.chunks(3)) {
    let cols = Layout::default()
      .direction(Direction::Horizontal)
      .constraints([Constraint::Ratio(1, 3); 3])
      .split(*row);
    for (col, feature) in cols.iter().zip(chunk) {
      draw_card(f, *col, feature, palette);
    }
  }
}

fn draw_card(f: &mut Frame, area: Rect, feature: &Feature, palette: &Palette) {
  let block = Block::default()
    .title(Span::styled(
      format!(" {} {} ", feature.icon, feature.title),
      palette.title(),
    ))
    .borders(Borders::ALL)
    .border_style(palette.border());
  let inner = block.inner(area);
  f.render_widget(block, area);

  let text = vec![
    Line::from(Span::styled(
      feature.tagline,
      Style::default().fg(palette.fg),
    )),
    Line::from(""),
    Line::from(Span::styled(feature.detail, palette.muted())),
  ];
  f.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), inner);
}

fn draw_badges(f: &mut Frame, area: Rect, palette: &Palette) {
  let mut spans = Vec::with_capacity(BADGES.len() * 2);
  for (i, badge) in BADGES.iter().enumerate() {
    // Filled, secondary, outline.
    let style = match i {
      0 => palette.cursor(),
      1 => Style::default().fg(palette.fg).bg(palette.bar_bg),
      _ => palette.border(),
    };
    spans.push(Span::styled(format!(" {badge} "), style));
    spans.push(Span::raw("  "));
  }

  let lines = vec![
    Line::from(Span::styled(
      "État du système",
      Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
    )),
    Line::from(spans),
  ];
  f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
