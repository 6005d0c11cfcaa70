use serde::{Deserialize, Serialize};

/// A short quote shown in the reminder panel and the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub arabic: String,
    pub english: String,
    pub source: String,
}

/// An entry in the community events listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityEvent {
    /// Free-form label such as "This Friday".
    pub date: String,
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recitation {
    pub reciter: String,
    /// Path or URL handed to the player. Empty means nothing to play.
    #[serde(default)]
    pub audio: String,
}

impl Recitation {
    pub fn audio_source(&self) -> Option<&str> {
        let src = self.audio.trim();
        if src.is_empty() { None } else { Some(src) }
    }
}
