use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime};
use crossterm::event::{KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Duration;

use crate::board::{Action, BoardContext, Mode, Playback, Player, action_for_key};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{events, header, next_prayer, prayers, recitations, reminder, statusbar};
use crate::utils::hijri::hijri_label;

/// What the event loop must do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Cancel the tick timer and start a new one for the active location.
    RestartTicker,
}

pub struct App {
    pub ctx: BoardContext,
    pub player: Player,
    pub show_help: bool,
    pub should_quit: bool,
    pub tick_period: Duration,
    /// Date shown in the header, kept current by ticks.
    pub today: NaiveDate,
    pub hijri_str: String,
    hijri_offset: i32,
}

impl App {
    pub fn new(ctx: BoardContext, player: Player, tick_period: Duration, hijri_offset: i32) -> Self {
        let today = now().date();
        App {
            ctx,
            player,
            show_help: false,
            should_quit: false,
            tick_period,
            today,
            hijri_str: hijri_label(today, hijri_offset),
            hijri_offset,
        }
    }

    pub fn mode(&self) -> Mode {
        if self.player.is_open() {
            Mode::Player
        } else if self.show_help {
            Mode::Help
        } else {
            Mode::Board
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Effect {
        // Some terminals also report key release and repeat
        if key.kind != KeyEventKind::Press {
            return Effect::None;
        }
        match action_for_key(key, self.mode()) {
            Some(action) => self.apply(action),
            None => Effect::None,
        }
    }

    pub fn apply(&mut self, action: Action) -> Effect {
        match action {
            Action::NextLocation => switched(self.ctx.next_location()),
            Action::PrevLocation => switched(self.ctx.prev_location()),
            Action::SelectLocation(idx) => switched(self.ctx.select_location(idx)),
            Action::NextReminder => {
                self.ctx.next_reminder();
                Effect::None
            }
            Action::RecitationUp => {
                self.ctx.recitation_up();
                Effect::None
            }
            Action::RecitationDown => {
                self.ctx.recitation_down();
                Effect::None
            }
            Action::OpenPlayer => {
                if let Some(recitation) = self.ctx.selected_recitation() {
                    self.player.open(recitation);
                }
                Effect::None
            }
            Action::ClosePlayer => {
                self.player.close();
                Effect::None
            }
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
                Effect::None
            }
            Action::Quit => {
                self.player.close();
                self.should_quit = true;
                Effect::None
            }
        }
    }

    /// Called once a fresh timer is running under `generation`.
    pub fn ticker_restarted(&mut self, generation: u64, now: NaiveDateTime) {
        self.ctx.restart_ticker(generation, now);
        self.roll_date(now);
    }

    pub fn tick(&mut self, generation: u64, now: NaiveDateTime) {
        self.ctx.on_tick(generation, now);
        self.roll_date(now);
    }

    /// Keep both header dates on the same day once the board passes midnight.
    fn roll_date(&mut self, now: NaiveDateTime) {
        let date = now.date();
        if date != self.today {
            self.today = date;
            self.hijri_str = hijri_label(date, self.hijri_offset);
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.draw_board(frame);

        if self.show_help {
            self.draw_help_overlay(frame);
        }
        if self.player.is_open() {
            self.draw_player_modal(frame);
        }
    }

    fn draw_board(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(
            frame,
            outer_chunks[0],
            self.today,
            &self.hijri_str,
            &self.ctx.locations,
            self.ctx.active_index(),
            self.ctx.current_reminder(),
        );
        statusbar::render(frame, outer_chunks[2]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(outer_chunks[1]);

        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9), // prayers + jummah
                Constraint::Min(0),    // recitations
            ])
            .split(columns[0]);

        let snapshot = self.ctx.snapshot();
        prayers::render(
            frame,
            left_chunks[0],
            self.ctx.active(),
            snapshot.map(|s| s.next.prayer),
        );
        recitations::render(
            frame,
            left_chunks[1],
            &self.ctx.recitations,
            self.ctx.selected_recitation_index(),
        );

        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8), // next prayer
                Constraint::Length(6), // reminder
                Constraint::Min(0),    // events
            ])
            .split(columns[1]);

        next_prayer::render(frame, right_chunks[0], snapshot);
        reminder::render(
            frame,
            right_chunks[1],
            self.ctx.current_reminder(),
            (self.ctx.reminder_index(), self.ctx.reminders.len()),
        );
        events::render(frame, right_chunks[2], &self.ctx.events);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let popup_area = centered(frame.area(), 2, 14);
        frame.render_widget(Clear, popup_area);

        let mut help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::gold().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (keys, what) in crate::board::actions::HELP {
            help_text.push(Line::from(vec![
                Span::styled(format!("  {:<15}", keys), theme::gold()),
                Span::styled(*what, theme::dim()),
            ]));
        }

        let block = Block::default()
            .title(Span::styled(" Help ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::gold())
            .style(theme::surface());

        frame.render_widget(Paragraph::new(help_text).block(block), popup_area);
    }

    fn draw_player_modal(&self, frame: &mut Frame) {
        let Some(modal) = self.player.modal() else {
            return;
        };
        let popup_area = centered(frame.area(), 2, 8);
        frame.render_widget(Clear, popup_area);

        let (status, style) = match &modal.playback {
            Playback::Playing(src) => (format!("♪ Playing {}", src), theme::green()),
            Playback::Unavailable => ("✗ Playback unavailable".to_string(), theme::red()),
            Playback::NoSource => ("No audio configured for this recitation".to_string(), theme::dim()),
        };

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", modal.title),
                theme::gold().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(format!("  {}", status), style)),
            Line::from(""),
            Line::from(Span::styled("  [Esc] / [x] close", theme::dim())),
        ];

        let block = Block::default()
            .title(Span::styled(" Player ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::amber())
            .style(theme::surface());

        frame.render_widget(Paragraph::new(text).block(block), popup_area);
    }
}

fn switched(changed: bool) -> Effect {
    if changed {
        Effect::RestartTicker
    } else {
        Effect::None
    }
}

/// A box `1/divisor`-ish of the screen width, `height` rows tall, centered.
fn centered(area: Rect, divisor: u16, height: u16) -> Rect {
    let width = (area.width / divisor).max(40).min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Run the TUI event loop.
pub fn run(mut app: App) -> Result<()> {
    let mut terminal = ratatui::init();
    let mut events = EventHandler::new();

    let generation = events.restart_ticker(app.tick_period);
    app.ticker_restarted(generation, now());

    let result = (|| -> Result<()> {
        loop {
            terminal.draw(|frame| app.draw(frame))?;

            match events.next()? {
                Event::Key(key) => {
                    if app.handle_key(key) == Effect::RestartTicker {
                        let generation = events.restart_ticker(app.tick_period);
                        app.ticker_restarted(generation, now());
                    }
                    if app.should_quit {
                        break;
                    }
                }
                Event::Tick(generation) => {
                    app.tick(generation, now());
                }
            }
        }
        Ok(())
    })();

    events.stop_ticker();
    app.ctx.stop_ticker();
    ratatui::restore();
    result
}
