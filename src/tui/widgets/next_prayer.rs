use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::prayer_times::TickSnapshot;
use crate::tui::theme;

/// Width in columns of "HH:MM:SS" drawn at quadrant pixel size.
const BIG_WIDTH: u16 = 8 * 4;

pub fn render(frame: &mut Frame, area: Rect, snapshot: Option<&TickSnapshot>) {
    let block = Block::default()
        .title(Span::styled(" Next Prayer ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(snap) = snapshot else {
        let empty = Paragraph::new(Line::from(Span::styled("  No data", theme::dim())));
        frame.render_widget(empty, inner);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // name + time
            Constraint::Length(4), // big countdown
            Constraint::Min(0),
        ])
        .split(inner);

    let countdown = snap.countdown.to_string();
    let heading = Line::from(vec![
        Span::styled(
            format!("  {}", snap.next.prayer.display_name().to_uppercase()),
            theme::gold().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  at {}", snap.next.time), theme::dim()),
        Span::styled("  in  ", theme::dim()),
        Span::styled(countdown.clone(), theme::amber().add_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(Paragraph::new(heading), rows[0]);

    if rows[1].width >= BIG_WIDTH + 2 {
        let big_area = Rect {
            x: rows[1].x + 2,
            width: rows[1].width - 2,
            ..rows[1]
        };
        let big = BigText::builder()
            .pixel_size(PixelSize::Quadrant)
            .style(theme::amber())
            .lines(vec![countdown.into()])
            .build();
        frame.render_widget(big, big_area);
    }
}
