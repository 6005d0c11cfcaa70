pub mod calculator;
pub mod countdown;
pub mod ticker;

pub use calculator::PrayerCalculator;
pub use countdown::Countdown;
pub use ticker::{CountdownTicker, TickSnapshot};
