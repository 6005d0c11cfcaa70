use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::{Location, Reminder};
use crate::tui::theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    today: NaiveDate,
    hijri_str: &str,
    locations: &[Location],
    active: usize,
    hero: Option<&Reminder>,
) {
    let gregorian_str = today.format("%a, %b %d, %Y").to_string();

    let title_line = Line::from(vec![
        Span::styled("  مِحْراب  ", theme::gold().add_modifier(Modifier::BOLD)),
        Span::styled("mihrab", theme::gold()),
    ]);

    let date_line = Line::from(vec![
        Span::styled(gregorian_str, theme::dim()),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(hijri_str, theme::amber()),
    ]);

    // Location tabs, numbered for direct selection
    let mut tabs = Vec::new();
    for (i, loc) in locations.iter().enumerate() {
        if i > 0 {
            tabs.push(Span::styled("   ", theme::dim()));
        }
        let label = format!(" {} {} ", i + 1, loc.name);
        if i == active {
            tabs.push(Span::styled(label, theme::active_row()));
        } else {
            tabs.push(Span::styled(label, theme::dim()));
        }
    }

    let hero_line = match hero {
        Some(r) => Line::from(vec![
            Span::styled(r.arabic.as_str(), theme::gold()),
            Span::styled("  ·  ", theme::dim()),
            Span::styled(r.english.as_str(), theme::bold()),
        ]),
        None => Line::from(""),
    };

    let text = vec![title_line, date_line, Line::from(tabs), hero_line];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::gold().add_modifier(Modifier::BOLD))
        .style(theme::base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
