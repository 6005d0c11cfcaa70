use chrono::NaiveTime;

use crate::config::LocationConfig;
use crate::error::ConfigError;
use crate::models::{PrayerTimes, PrayerType};

/// A place with its own configured prayer times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub name: String,
    pub times: PrayerTimes,
    /// Friday congregation start times, display only.
    pub jummah: Vec<String>,
}

impl TryFrom<&LocationConfig> for Location {
    type Error = ConfigError;

    fn try_from(cfg: &LocationConfig) -> Result<Self, Self::Error> {
        let parse = |prayer: PrayerType, value: &str| {
            parse_hhmm(value).ok_or_else(|| ConfigError::InvalidTime {
                location: cfg.name.clone(),
                prayer: prayer.display_name(),
                value: value.to_string(),
            })
        };

        let times = PrayerTimes {
            fajr: parse(PrayerType::Fajr, &cfg.prayers.fajr)?,
            dhuhr: parse(PrayerType::Dhuhr, &cfg.prayers.dhuhr)?,
            asr: parse(PrayerType::Asr, &cfg.prayers.asr)?,
            maghrib: parse(PrayerType::Maghrib, &cfg.prayers.maghrib)?,
            isha: parse(PrayerType::Isha, &cfg.prayers.isha)?,
        };

        if !times.is_increasing() {
            log::warn!(
                "Prayer times for {} are not in increasing order; next-prayer results may be wrong",
                cfg.name
            );
        }

        Ok(Location {
            name: cfg.name.clone(),
            times,
            jummah: cfg.jummah.clone(),
        })
    }
}

/// Parse a 24-hour `HH:MM` time-of-day.
pub fn parse_hhmm(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").ok()
}
