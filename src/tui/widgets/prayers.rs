use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::models::{Location, PrayerType};
use crate::tui::theme;
use crate::utils::format::{format_jummah, format_time};

/// Today's prayers for `location`, with `next` highlighted.
pub fn render(frame: &mut Frame, area: Rect, location: &Location, next: Option<PrayerType>) {
    let block = Block::default()
        .title(Span::styled(
            format!(" Prayers · {} ", location.name),
            theme::gold(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let mut items: Vec<ListItem> = location
        .times
        .in_order()
        .map(|(prayer, time)| {
            let is_next = next == Some(prayer);
            let marker = if is_next { "▸ " } else { "  " };

            let line = Line::from(vec![
                Span::raw(marker),
                Span::raw(format!("{:<10}", prayer.display_name())),
                Span::raw(format_time(time)),
            ]);

            let style = if is_next { theme::active_row() } else { theme::bold() };
            ListItem::new(line).style(style)
        })
        .collect();

    items.push(ListItem::new(Line::from("")));
    items.push(ListItem::new(Line::from(vec![
        Span::styled("  Jummah    ", theme::dim()),
        Span::styled(format_jummah(&location.jummah), theme::amber()),
    ])));

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
