use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(14, 20, 18);
pub const SURFACE: Color = Color::Rgb(22, 30, 27);
pub const BORDER: Color = Color::Rgb(44, 64, 56);
pub const TEXT: Color = Color::Rgb(226, 222, 206);
pub const TEXT_DIM: Color = Color::Rgb(120, 132, 118);
pub const GOLD: Color = Color::Rgb(201, 166, 82);
pub const GREEN: Color = Color::Rgb(86, 156, 116);
pub const AMBER: Color = Color::Rgb(214, 142, 64);
pub const RED: Color = Color::Rgb(182, 84, 64);
pub const HIGHLIGHT: Color = Color::Rgb(36, 58, 48);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn gold() -> Style {
    Style::default().fg(GOLD)
}

pub fn green() -> Style {
    Style::default().fg(GREEN)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

/// Row style for the upcoming prayer.
pub fn active_row() -> Style {
    Style::default()
        .fg(GOLD)
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}
