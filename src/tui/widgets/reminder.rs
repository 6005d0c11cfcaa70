use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::Reminder;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, reminder: Option<&Reminder>, position: (usize, usize)) {
    let (idx, total) = position;
    let title = if total > 0 {
        format!(" Reminder {}/{} ", idx % total + 1, total)
    } else {
        " Reminder ".to_string()
    };

    let block = Block::default()
        .title(Span::styled(title, theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let content = match reminder {
        None => vec![Line::from(Span::styled("  No reminders configured", theme::dim()))],
        Some(r) => vec![
            Line::from(Span::styled(
                format!("  {}", r.arabic),
                theme::gold().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(format!("  {}", r.english), theme::bold())),
            Line::from(Span::styled(format!("  — {}", r.source), theme::dim())),
            Line::from(Span::styled("  [n] next", theme::dim())),
        ],
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
