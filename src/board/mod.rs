pub mod actions;
pub mod context;
pub mod player;

pub use actions::{Action, Mode, action_for_key};
pub use context::BoardContext;
pub use player::{ExternalPlayer, Playback, Player};
