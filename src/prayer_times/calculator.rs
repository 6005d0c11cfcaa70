use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{Location, NextPrayer, PrayerType};
use crate::utils::format::format_time;

/// Resolves the next prayer for one location's configured times.
pub struct PrayerCalculator<'a> {
    location: &'a Location,
}

impl<'a> PrayerCalculator<'a> {
    pub fn new(location: &'a Location) -> Self {
        Self { location }
    }

    /// The first prayer, in canonical order, whose moment today is strictly
    /// after `now`. A prayer at exactly `now` has already passed. When every
    /// prayer has passed, the next one is the first prayer tomorrow.
    pub fn find_next(&self, now: NaiveDateTime) -> NextPrayer {
        let today = now.date();

        for (prayer, time) in self.location.times.in_order() {
            let at = today.and_time(time);
            if at > now {
                return self.next_prayer(prayer, at);
            }
        }

        // All prayers passed, roll over to the first prayer tomorrow
        let first = PrayerType::ORDER[0];
        let tomorrow = today.succ_opt().unwrap_or(NaiveDate::MAX);
        let at = tomorrow.and_time(self.location.times.time_of(first));
        self.next_prayer(first, at)
    }

    fn next_prayer(&self, prayer: PrayerType, at: NaiveDateTime) -> NextPrayer {
        NextPrayer {
            prayer,
            time: format_time(self.location.times.time_of(prayer)),
            at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use chrono::{Duration, NaiveTime};

    fn london() -> Location {
        AppConfig::default().resolve_locations().unwrap().remove(0)
    }

    fn at(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_milli_opt(h, m, s, ms)
            .unwrap()
    }

    #[test]
    fn test_before_fajr_is_fajr_today() {
        let loc = london();
        let next = PrayerCalculator::new(&loc).find_next(at(3, 0, 0, 0));
        assert_eq!(next.prayer, PrayerType::Fajr);
        assert_eq!(next.time, "05:40");
        assert_eq!(next.at, at(5, 40, 0, 0));
    }

    #[test]
    fn test_between_asr_and_maghrib() {
        let loc = london();
        let next = PrayerCalculator::new(&loc).find_next(at(15, 0, 0, 0));
        assert_eq!(next.prayer, PrayerType::Maghrib);
        assert_eq!(next.time, "16:00");
        assert_eq!(next.at, at(16, 0, 0, 0));
        assert_eq!((next.at - at(15, 0, 0, 0)).num_seconds(), 3600);
    }

    #[test]
    fn test_equal_moment_counts_as_passed() {
        let loc = london();
        let next = PrayerCalculator::new(&loc).find_next(at(12, 10, 0, 0));
        assert_eq!(next.prayer, PrayerType::Asr);
        assert_eq!(next.at, at(14, 25, 0, 0));
    }

    #[test]
    fn test_just_before_prayer_still_selects_it() {
        let loc = london();
        let next = PrayerCalculator::new(&loc).find_next(at(12, 9, 59, 999));
        assert_eq!(next.prayer, PrayerType::Dhuhr);
    }

    #[test]
    fn test_after_isha_rolls_to_fajr_tomorrow() {
        let loc = london();
        let next = PrayerCalculator::new(&loc).find_next(at(18, 0, 0, 0));
        assert_eq!(next.prayer, PrayerType::Fajr);
        assert_eq!(next.time, "05:40");
        assert_eq!(next.at, at(5, 40, 0, 0) + Duration::days(1));
    }

    #[test]
    fn test_at_isha_rolls_to_fajr_tomorrow() {
        let loc = london();
        let next = PrayerCalculator::new(&loc).find_next(at(17, 30, 0, 0));
        assert_eq!(next.prayer, PrayerType::Fajr);
        assert_eq!(next.at.date(), at(0, 0, 0, 0).date().succ_opt().unwrap());
    }

    #[test]
    fn test_rollover_crosses_month_end() {
        let loc = london();
        let now = NaiveDate::from_ymd_opt(2026, 12, 31)
            .unwrap()
            .and_hms_opt(23, 0, 0)
            .unwrap();
        let next = PrayerCalculator::new(&loc).find_next(now);
        assert_eq!(
            next.at,
            NaiveDate::from_ymd_opt(2027, 1, 1)
                .unwrap()
                .and_time(NaiveTime::from_hms_opt(5, 40, 0).unwrap())
        );
    }

    #[test]
    fn test_every_minute_of_the_day() {
        let loc = london();
        let calc = PrayerCalculator::new(&loc);
        let last = loc.times.isha;
        let mut now = at(0, 0, 0, 0);
        let end = now + Duration::days(1);

        while now < end {
            let next = calc.find_next(now);
            assert!(next.at > now, "{now} -> {}", next.at);

            if now.time() < last {
                // Same day, earliest prayer after now
                assert_eq!(next.at.date(), now.date());
                let expected = loc
                    .times
                    .in_order()
                    .find(|(_, t)| *t > now.time())
                    .map(|(p, _)| p)
                    .unwrap();
                assert_eq!(next.prayer, expected);
            } else {
                assert_eq!(next.prayer, PrayerType::Fajr);
                assert_eq!(next.at.date(), now.date().succ_opt().unwrap());
            }
            now += Duration::seconds(30);
        }
    }
}
