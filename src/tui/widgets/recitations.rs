use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::models::Recitation;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, recitations: &[Recitation], selected: usize) {
    let block = Block::default()
        .title(Span::styled(" Recitations ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let items: Vec<ListItem> = recitations
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let is_selected = i == selected;
            let name_style = if is_selected {
                theme::gold().add_modifier(Modifier::BOLD)
            } else {
                theme::bold()
            };
            let (icon, icon_style) = if r.audio_source().is_some() {
                ("♪", theme::green())
            } else {
                ("·", theme::dim())
            };

            ListItem::new(Line::from(vec![
                Span::styled(if is_selected { "  ▸ " } else { "    " }, theme::gold()),
                Span::styled(icon, icon_style),
                Span::styled(format!(" {}", r.reciter), name_style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
