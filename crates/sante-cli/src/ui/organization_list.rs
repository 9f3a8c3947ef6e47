//! Organization list pane (left panel).

use ratatui::{
  Frame,
  layout::Rect,
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use sante_core::storage::KeyValueStore;

use super::palette::Palette;
use crate::app::{App, Screen};

/// Render the organization list into `area`.
pub fn draw<S: KeyValueStore>(f: &mut Frame, area: Rect, app: &App<S>, palette: &Palette) {
  let filtered = app.filtered_organizations();

  // Title with page position and count.
  let position = match &app.page {
    Some(page) => format!(
      "p. {}/{} · {} au total",
      page.number + 1,
      page.total_pages.max(1),
      page.total_elements
    ),
    None => "…".to_string(),
  };
  let title = if app.filter_active || !app.filter.is_empty() {
    format!(
      " Organisations ({}/{}) {position} ",
      filtered.len(),
      app.organizations.len()
    )
  } else {
    format!(" Organisations {position} ")
  };

  // Dimmed while the detail pane has focus.
  let border_style = if app.screen == Screen::OrganizationDetail {
    palette.border()
  } else {
    palette.title()
  };
  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(border_style);

  let items: Vec<ListItem> = filtered
    .iter()
    .map(|organization| {
      let mut spans = vec![Span::raw(organization.name.clone())];
      if let Some(city) = organization.address.as_ref().and_then(|a| a.city.as_deref()) {
        spans.push(Span::styled(format!("  {city}"), palette.muted()));
      }
      ListItem::new(Line::from(spans))
    })
    .collect();

  let mut inner_area = block.inner(area);
  f.render_widget(block, area);

  // If filter is active or set, show a filter bar at the bottom of the inner area.
  if (app.filter_active || !app.filter.is_empty()) && inner_area.height > 2 {
    let filter_area = Rect {
      x:      inner_area.x,
      y:      inner_area.y + inner_area.height - 1,
      width:  inner_area.width,
      height: 1,
    };
    inner_area.height = inner_area.height.saturating_sub(1);

    let filter_text = if app.filter_active {
      format!("/{}_", app.filter)
    } else {
      format!("/{}", app.filter)
    };
    f.render_widget(
      Paragraph::new(filter_text).style(palette.title()),
      filter_area,
    );
  }

  if filtered.is_empty() {
    let empty = if app.organizations.is_empty() {
      "Aucune organisation."
    } else {
      "Aucun résultat."
    };
    f.render_widget(Paragraph::new(empty).style(palette.muted()), inner_area);
    return;
  }

  // Scrollable list with cursor tracking.
  let mut state = ListState::default();
  state.select(Some(app.list_cursor));

  f.render_stateful_widget(
    List::new(items)
      .highlight_style(palette.cursor())
      .highlight_symbol("› "),
    inner_area,
    &mut state,
  );
}
