use thiserror::Error;

/// Problems with the board configuration, reported before the board starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No locations configured")]
    NoLocations,

    #[error("Location '{0}' is configured more than once")]
    DuplicateLocation(String),

    #[error("Unknown location '{name}'. Available: {available}")]
    UnknownLocation { name: String, available: String },

    #[error("Invalid {prayer} time '{value}' for {location} (expected HH:MM, 24-hour)")]
    InvalidTime {
        location: String,
        prayer: &'static str,
        value: String,
    },
}
