use chrono::NaiveDateTime;

use crate::models::{Location, NextPrayer};
use crate::prayer_times::{Countdown, PrayerCalculator};

/// What the display shows after a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickSnapshot {
    pub next: NextPrayer,
    pub countdown: Countdown,
}

impl TickSnapshot {
    /// Recomputes everything from `now`; nothing is carried between ticks.
    pub fn compute(location: &Location, now: NaiveDateTime) -> Self {
        let next = PrayerCalculator::new(location).find_next(now);
        let countdown = Countdown::between(now, next.at);
        Self { next, countdown }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerState {
    Stopped,
    /// Running against the timer started with this generation.
    Running { generation: u64 },
}

/// Drives the next-prayer countdown from periodic timer ticks.
///
/// Every timer start gets a fresh generation. Ticks carrying any other
/// generation come from a cancelled timer and are dropped.
#[derive(Debug)]
pub struct CountdownTicker {
    state: TickerState,
    last: Option<TickSnapshot>,
}

impl Default for CountdownTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownTicker {
    pub fn new() -> Self {
        Self {
            state: TickerState::Stopped,
            last: None,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TickerState::Running { .. })
    }

    /// Start against `location`, replacing any previous run, and publish a
    /// snapshot straight away.
    pub fn start(
        &mut self,
        generation: u64,
        location: &Location,
        now: NaiveDateTime,
    ) -> &TickSnapshot {
        if self.is_running() {
            self.stop();
        }
        log::debug!("Countdown ticker started (generation {}) for {}", generation, location.name);
        self.state = TickerState::Running { generation };
        self.last.insert(TickSnapshot::compute(location, now))
    }

    pub fn stop(&mut self) {
        if let TickerState::Running { generation } = self.state {
            log::debug!("Countdown ticker stopped (generation {})", generation);
        }
        self.state = TickerState::Stopped;
    }

    /// Handle one timer tick. Returns `None` when stopped or when the tick
    /// belongs to an older timer.
    pub fn tick(
        &mut self,
        generation: u64,
        location: &Location,
        now: NaiveDateTime,
    ) -> Option<&TickSnapshot> {
        match self.state {
            TickerState::Running { generation: current } if current == generation => {
                Some(self.last.insert(TickSnapshot::compute(location, now)))
            }
            _ => None,
        }
    }

    pub fn snapshot(&self) -> Option<&TickSnapshot> {
        self.last.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::models::PrayerType;
    use chrono::{Duration, NaiveDate};

    fn locations() -> Vec<Location> {
        AppConfig::default().resolve_locations().unwrap()
    }

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_start_publishes_immediately() {
        let locs = locations();
        let mut ticker = CountdownTicker::new();
        assert!(!ticker.is_running());
        assert!(ticker.snapshot().is_none());

        let snap = ticker.start(1, &locs[0], at(15, 0, 0)).clone();
        assert_eq!(snap.next.prayer, PrayerType::Maghrib);
        assert_eq!(snap.countdown.to_string(), "01:00:00");
        assert_eq!(ticker.state, TickerState::Running { generation: 1 });
        assert_eq!(ticker.snapshot(), Some(&snap));
    }

    #[test]
    fn test_tick_recomputes_from_wall_clock() {
        let locs = locations();
        let mut ticker = CountdownTicker::new();
        ticker.start(1, &locs[0], at(15, 0, 0));

        let snap = ticker.tick(1, &locs[0], at(15, 0, 1)).unwrap();
        assert_eq!(snap.countdown.to_string(), "00:59:59");

        // A jump forward (suspended process) is reflected on the next tick
        let snap = ticker.tick(1, &locs[0], at(15, 59, 30)).unwrap();
        assert_eq!(snap.countdown.to_string(), "00:00:30");

        let snap = ticker.tick(1, &locs[0], at(16, 0, 0)).unwrap();
        assert_eq!(snap.next.prayer, PrayerType::Isha);
        assert_eq!(snap.countdown.to_string(), "01:30:00");
    }

    #[test]
    fn test_stale_generation_is_ignored() {
        let locs = locations();
        let mut ticker = CountdownTicker::new();
        ticker.start(1, &locs[0], at(15, 0, 0));
        ticker.start(2, &locs[1], at(15, 0, 0));

        assert!(ticker.tick(1, &locs[0], at(15, 0, 1)).is_none());
        let snap = ticker.tick(2, &locs[1], at(15, 0, 1)).unwrap();
        // Birmingham Maghrib is 16:05
        assert_eq!(snap.next.time, "16:05");
        assert_eq!(snap.countdown.to_string(), "01:04:59");
    }

    #[test]
    fn test_stopped_ticker_ignores_ticks_but_keeps_last_snapshot() {
        let locs = locations();
        let mut ticker = CountdownTicker::new();
        ticker.start(3, &locs[0], at(18, 0, 0));
        ticker.stop();
        assert_eq!(ticker.state, TickerState::Stopped);
        assert!(ticker.tick(3, &locs[0], at(18, 0, 1)).is_none());

        let last = ticker.snapshot().unwrap();
        assert_eq!(last.next.prayer, PrayerType::Fajr);
        assert_eq!(last.next.at, at(5, 40, 0) + Duration::days(1));
    }
}
