use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerType {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerType {
    /// Canonical order: display order and the scan order for the next prayer.
    pub const ORDER: [PrayerType; 5] = [
        PrayerType::Fajr,
        PrayerType::Dhuhr,
        PrayerType::Asr,
        PrayerType::Maghrib,
        PrayerType::Isha,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerType::Fajr => "Fajr",
            PrayerType::Dhuhr => "Dhuhr",
            PrayerType::Asr => "Asr",
            PrayerType::Maghrib => "Maghrib",
            PrayerType::Isha => "Isha",
        }
    }
}

impl std::fmt::Display for PrayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One time-of-day per canonical prayer. Having a field per prayer keeps the
/// key set identical to `PrayerType::ORDER`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerTimes {
    pub fajr: NaiveTime,
    pub dhuhr: NaiveTime,
    pub asr: NaiveTime,
    pub maghrib: NaiveTime,
    pub isha: NaiveTime,
}

impl PrayerTimes {
    pub fn time_of(&self, prayer: PrayerType) -> NaiveTime {
        match prayer {
            PrayerType::Fajr => self.fajr,
            PrayerType::Dhuhr => self.dhuhr,
            PrayerType::Asr => self.asr,
            PrayerType::Maghrib => self.maghrib,
            PrayerType::Isha => self.isha,
        }
    }

    /// (prayer, time) pairs in canonical order.
    pub fn in_order(&self) -> impl Iterator<Item = (PrayerType, NaiveTime)> + '_ {
        PrayerType::ORDER
            .into_iter()
            .map(move |p| (p, self.time_of(p)))
    }

    /// True when every prayer falls after the previous one within the day.
    pub fn is_increasing(&self) -> bool {
        let times: Vec<NaiveTime> = self.in_order().map(|(_, t)| t).collect();
        times.windows(2).all(|w| w[0] < w[1])
    }
}

/// The next prayer to occur after some moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextPrayer {
    pub prayer: PrayerType,
    /// Configured time-of-day, `HH:MM`.
    pub time: String,
    /// Absolute local moment the prayer next occurs.
    pub at: NaiveDateTime,
}
