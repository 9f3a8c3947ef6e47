//! Organization detail pane (right panel).

use ratatui::{
  Frame,
  layout::Rect,
  style::{Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};
use sante_core::{
  model::{Organization, Workstation},
  storage::KeyValueStore,
};

use super::palette::Palette;
use crate::app::App;

// ─── Public entry ─────────────────────────────────────────────────────────────

/// Render the detail pane into `area`.
pub fn draw<S: KeyValueStore>(f: &mut Frame, area: Rect, app: &App<S>, palette: &Palette) {
  let Some(organization) = &app.selected else {
    return;
  };

  let block = Block::default()
    .title(Span::styled(format!(" {} ", organization.name), palette.title()))
    .borders(Borders::ALL)
    .border_style(palette.border());
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines = summary_lines(organization, palette);
  lines.push(Line::from(""));
  lines.push(Line::from(Span::styled(
    format!("Postes de travail ({})", app.workstations.len()),
    Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
  )));

  if app.workstations.is_empty() {
    lines.push(Line::from(Span::styled("Aucun poste.", palette.muted())));
  }
  for workstation in app.workstations.iter().skip(app.detail_scroll) {
    lines.extend(workstation_lines(workstation, palette));
  }

  f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

// ─── Formatting helpers ───────────────────────────────────────────────────────

fn field<'a>(label: &'a str, value: String, palette: &Palette) -> Line<'a> {
  Line::from(vec![
    Span::styled(format!("{label:<14}"), palette.title()),
    Span::raw(value),
  ])
}

fn summary_lines<'a>(organization: &Organization, palette: &Palette) -> Vec<Line<'a>> {
  let mut lines = vec![field("id", organization.id.to_string(), palette)];
  if let Some(address) = &organization.address {
    let summary = address.summary();
    if !summary.is_empty() {
      lines.push(field("adresse", summary, palette));
    }
  }
  if !organization.campaign_ids.is_empty() {
    let ids: Vec<String> = organization
      .campaign_ids
      .iter()
      .map(|id| format!("#{id}"))
      .collect();
    lines.push(field("campagnes", ids.join(", "), palette));
  }
  if let Some(updated) = &organization.updated_at {
    lines.push(field("modifiée", updated.clone(), palette));
  }
  lines
}

fn workstation_lines<'a>(workstation: &Workstation, palette: &Palette) -> Vec<Line<'a>> {
  let mut title = vec![Span::raw(format!("• {}", workstation.title))];
  if let Some(code) = &workstation.code {
    title.push(Span::styled(format!("  [{code}]"), palette.muted()));
  }
  let mut lines = vec![Line::from(title)];
  if let Some(description) = &workstation.description {
    lines.push(Line::from(Span::styled(
      format!("    {description}"),
      palette.muted(),
    )));
  }
  if let Some(risks) = &workstation.professional_risks {
    lines.push(Line::from(vec![
      Span::styled("    risques : ", Style::default().fg(palette.warn)),
      Span::raw(risks.clone()),
    ]));
  }
  lines
}
