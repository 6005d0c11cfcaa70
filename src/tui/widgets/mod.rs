pub mod events;
pub mod header;
pub mod next_prayer;
pub mod prayers;
pub mod recitations;
pub mod reminder;
pub mod statusbar;
