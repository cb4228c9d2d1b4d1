// src/tui/widgets/conversation.rs - Message pane for the active session.
//
// USER messages sit on the right, AI messages on the left, each followed by
// its "Today HH:MM" label.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::timefmt::message_label;
use crate::core::types::{Message, Session};
use crate::tui::theme::Theme;

pub struct ConversationView<'a> {
    pub session: Option<&'a Session>,
    pub messages: &'a [Message],
    pub focused: bool,
    /// Show the back hint (single-pane layout).
    pub narrow: bool,
}

pub fn render(
    f: &mut Frame,
    area: Rect,
    view: &ConversationView,
    scroll: &mut u16,
    scroll_to_end: bool,
) {
    let title = match view.session {
        Some(s) if view.narrow => format!(" < {} ", s.name),
        Some(s) => format!(" {} ", s.name),
        None => " Conversation ".to_string(),
    };
    let block = Block::default()
        .title(Span::styled(title, Theme::header()))
        .borders(Borders::ALL)
        .border_style(if view.focused {
            Theme::border_focus()
        } else {
            Theme::border()
        });

    if view.session.is_none() {
        let p = Paragraph::new(Line::from(Span::styled(
            "  Select a session to view its messages.",
            Theme::text_dim(),
        )))
        .block(block);
        f.render_widget(p, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2);
    let lines = message_lines(view.messages, bubble_width(inner_width));

    let limit = max_scroll(lines.len(), inner_height);
    if scroll_to_end {
        *scroll = limit;
    }
    *scroll = (*scroll).min(limit);

    let p = Paragraph::new(lines).block(block).scroll((*scroll, 0));
    f.render_widget(p, area);
}

/// Furthest scroll offset that still fills the pane. Saturates at the
/// largest offset a paragraph can take.
fn max_scroll(total_lines: usize, height: u16) -> u16 {
    u16::try_from(total_lines)
        .unwrap_or(u16::MAX)
        .saturating_sub(height)
}

/// Bubbles take at most 70% of the pane.
fn bubble_width(inner_width: usize) -> usize {
    (inner_width * 7 / 10).max(10)
}

pub fn message_lines(messages: &[Message], width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for message in messages {
        let alignment = if message.is_user() {
            Alignment::Right
        } else {
            Alignment::Left
        };
        let style = Theme::bubble(message.action);
        for chunk in wrap_text(&message.content, width) {
            lines.push(Line::from(Span::styled(format!(" {chunk} "), style)).alignment(alignment));
        }
        lines.push(
            Line::from(Span::styled(message_label(&message.timestamp), Theme::text_dim()))
                .alignment(alignment),
        );
        lines.push(Line::default());
    }
    lines
}

/// Greedy word wrap by display width. Words wider than `width` are split
/// between characters.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;
        for word in paragraph.split_whitespace() {
            let mut pieces = if word.width() > width {
                wrap_chars(word, width)
            } else {
                vec![word.to_string()]
            };
            let last = pieces.pop().unwrap_or_default();
            for piece in pieces {
                if !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                }
                out.push(piece);
                current_width = 0;
            }

            let last_width = last.width();
            if current_width > 0 && current_width + 1 + last_width > width {
                out.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(&last);
            current_width += last_width;
        }
        out.push(current);
    }
    out
}

/// Split a single word into chunks no wider than `width`. A character wider
/// than `width` gets a chunk of its own.
fn wrap_chars(word: &str, width: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for c in word.chars() {
        let w = c.width().unwrap_or(0);
        if current_width + w > width && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(c);
        current_width += w;
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
