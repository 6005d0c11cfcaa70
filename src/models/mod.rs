pub mod board;
pub mod location;
pub mod prayer;

pub use board::{CommunityEvent, Recitation, Reminder};
pub use location::Location;
pub use prayer::{NextPrayer, PrayerTimes, PrayerType};
