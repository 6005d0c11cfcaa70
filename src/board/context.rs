use chrono::NaiveDateTime;

use crate::config::AppConfig;
use crate::error::ConfigError;
use crate::models::{CommunityEvent, Location, Recitation, Reminder};
use crate::prayer_times::{CountdownTicker, TickSnapshot};

/// Everything the board shows, plus the little state the user can change:
/// which location is active, which reminder is up, which recitation is
/// selected, and the countdown ticker.
#[derive(Debug)]
pub struct BoardContext {
    pub locations: Vec<Location>,
    pub reminders: Vec<Reminder>,
    pub events: Vec<CommunityEvent>,
    pub recitations: Vec<Recitation>,

    active_location: usize,
    reminder_index: usize,
    selected_recitation: usize,
    ticker: CountdownTicker,
}

impl BoardContext {
    pub fn from_config(config: &AppConfig, location: Option<&str>) -> Result<Self, ConfigError> {
        let locations = config.resolve_locations()?;
        let active_location = config.starting_location(&locations, location)?;
        Ok(Self {
            locations,
            reminders: config.reminders.clone(),
            events: config.events.clone(),
            recitations: config.recitations.clone(),
            active_location,
            reminder_index: 0,
            selected_recitation: 0,
            ticker: CountdownTicker::new(),
        })
    }

    pub fn active_index(&self) -> usize {
        self.active_location
    }

    pub fn active(&self) -> &Location {
        &self.locations[self.active_location]
    }

    /// Make `idx` the active location. Returns false when out of range or
    /// already active.
    pub fn select_location(&mut self, idx: usize) -> bool {
        if idx >= self.locations.len() || idx == self.active_location {
            return false;
        }
        log::debug!(
            "Location switched: {} -> {}",
            self.locations[self.active_location].name,
            self.locations[idx].name
        );
        self.active_location = idx;
        true
    }

    pub fn next_location(&mut self) -> bool {
        let idx = (self.active_location + 1) % self.locations.len();
        self.select_location(idx)
    }

    pub fn prev_location(&mut self) -> bool {
        let len = self.locations.len();
        let idx = (self.active_location + len - 1) % len;
        self.select_location(idx)
    }

    pub fn reminder_index(&self) -> usize {
        self.reminder_index
    }

    pub fn current_reminder(&self) -> Option<&Reminder> {
        if self.reminders.is_empty() {
            return None;
        }
        self.reminders.get(self.reminder_index % self.reminders.len())
    }

    pub fn next_reminder(&mut self) {
        self.reminder_index = self.reminder_index.wrapping_add(1);
    }

    pub fn selected_recitation_index(&self) -> usize {
        self.selected_recitation
    }

    pub fn selected_recitation(&self) -> Option<&Recitation> {
        self.recitations.get(self.selected_recitation)
    }

    pub fn recitation_up(&mut self) {
        self.selected_recitation = self.selected_recitation.saturating_sub(1);
    }

    pub fn recitation_down(&mut self) {
        let max = self.recitations.len().saturating_sub(1);
        if self.selected_recitation < max {
            self.selected_recitation += 1;
        }
    }

    /// (Re)start the countdown for the active location under a new timer
    /// generation. The snapshot is available immediately.
    pub fn restart_ticker(&mut self, generation: u64, now: NaiveDateTime) -> &TickSnapshot {
        let location = &self.locations[self.active_location];
        self.ticker.start(generation, location, now)
    }

    pub fn stop_ticker(&mut self) {
        self.ticker.stop();
    }

    pub fn on_tick(&mut self, generation: u64, now: NaiveDateTime) -> Option<&TickSnapshot> {
        let location = &self.locations[self.active_location];
        self.ticker.tick(generation, location, now)
    }

    pub fn snapshot(&self) -> Option<&TickSnapshot> {
        self.ticker.snapshot()
    }
}
