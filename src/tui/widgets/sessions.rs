// src/tui/widgets/sessions.rs - Session list pane.

use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::core::ViewerState;
use crate::tui::theme::Theme;

/// Rows each session occupies: name + subtitle.
pub const ITEM_HEIGHT: u16 = 2;

/// Spinner frames for the loading indicator.
const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Draw the list and return how many session rows fit in the viewport.
pub fn render(
    f: &mut Frame,
    area: Rect,
    state: &ViewerState,
    list_state: &mut ListState,
    now: DateTime<Utc>,
    focused: bool,
    frame_count: usize,
) -> usize {
    let sessions = state.sessions();
    let active = state.viewer.active_session_id();

    let mut items: Vec<ListItem> = sessions
        .iter()
        .map(|s| {
            let subtitle = crate::core::timefmt::session_subtitle(s, now).unwrap_or_default();
            let name_style = if Some(s.id) == active {
                Theme::session_name().patch(Theme::row_active())
            } else {
                Theme::session_name()
            };
            ListItem::new(vec![
                Line::from(Span::styled(format!(" {}", s.name), name_style)),
                Line::from(Span::styled(format!(" {subtitle}"), Theme::text_dim())),
            ])
        })
        .collect();

    if state.loader.has_more() || state.loader.is_loading() {
        let label = if state.loader.is_loading() {
            format!(" {} loading...", SPINNER[frame_count % SPINNER.len()])
        } else {
            " [m] Load More".to_string()
        };
        items.push(ListItem::new(Line::from(Span::styled(label, Theme::load_more()))));
    }

    let title = match state.loader.total_pages() {
        Some(total) => format!(
            " Messaging ({}, page {}/{}) ",
            sessions.len(),
            state.loader.loaded_pages(),
            total
        ),
        None => format!(" Messaging ({}) ", sessions.len()),
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(Span::styled(title, Theme::header()))
                .borders(Borders::ALL)
                .border_style(if focused {
                    Theme::border_focus()
                } else {
                    Theme::border()
                }),
        )
        .highlight_style(Theme::row_selected())
        .highlight_symbol(">");

    list_state.select(state.highlighted());
    f.render_stateful_widget(list, area, list_state);

    (area.height.saturating_sub(2) / ITEM_HEIGHT) as usize
}

/// Whether the last session row lies inside the viewport.
pub fn last_row_visible(offset: usize, visible_rows: usize, len: usize) -> bool {
    len > 0 && offset + visible_rows >= len
}
