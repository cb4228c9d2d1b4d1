// src/tui/widgets/banner.rs - Notification banner overlay.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::core::notify::Banner;
use crate::tui::theme::Theme;

/// Draw the banner on the second-to-last row of `area`, right-aligned on wide
/// terminals and full width on narrow ones.
pub fn render(f: &mut Frame, area: Rect, banner: &Banner) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let style = Theme::banner(banner.kind);
    let text = format!(" x {}   [x] close ", banner.message);
    let wanted = u16::try_from(text.width()).unwrap_or(u16::MAX);

    let width = wanted.min(area.width);
    let x = if area.width >= 80 {
        area.x + area.width.saturating_sub(width + 1)
    } else {
        area.x
    };
    let y = area.y + area.height.saturating_sub(2);
    let rect = Rect::new(x, y, width, 1);

    f.render_widget(Clear, rect);
    f.render_widget(Paragraph::new(Line::from(Span::styled(text, style))), rect);
}
