use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::CommunityEvent;
use crate::tui::theme;
use crate::utils::format::{pad_width, truncate_width};

pub fn render(frame: &mut Frame, area: Rect, events: &[CommunityEvent]) {
    let block = Block::default()
        .title(Span::styled(" Events ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    // Room left on a line after the indent and the date pill
    let date_width = events
        .iter()
        .map(|e| unicode_width::UnicodeWidthStr::width(e.date.as_str()))
        .max()
        .unwrap_or(0);
    let text_width = (area.width as usize).saturating_sub(date_width + 8);

    let mut lines = Vec::new();
    for ev in events {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", pad_width(&ev.date, date_width)), theme::amber()),
            Span::styled(
                truncate_width(&ev.title, text_width),
                theme::bold().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {} {}", " ".repeat(date_width), truncate_width(&ev.desc, text_width)),
            theme::dim(),
        )));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled("  Nothing scheduled", theme::dim())));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
