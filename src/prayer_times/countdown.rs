use chrono::NaiveDateTime;

use crate::utils::format::pad2;

/// Whole seconds left until a moment, never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub total_secs: i64,
}

impl Countdown {
    pub fn between(now: NaiveDateTime, target: NaiveDateTime) -> Self {
        let ms = (target - now).num_milliseconds();
        Self {
            total_secs: ms.div_euclid(1000).max(0),
        }
    }

    pub fn hours(&self) -> i64 {
        self.total_secs / 3600
    }

    pub fn minutes(&self) -> i64 {
        (self.total_secs % 3600) / 60
    }

    pub fn seconds(&self) -> i64 {
        self.total_secs % 60
    }
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            pad2(self.hours()),
            pad2(self.minutes()),
            pad2(self.seconds())
        )
    }
}
