use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::models::{CommunityEvent, Location, Recitation, Reminder};

fn default_tick_ms() -> u64 {
    1000
}
fn default_hijri_offset() -> i32 {
    0
}
fn default_player_command() -> String {
    "mpv".to_string()
}
fn default_player_args() -> Vec<String> {
    vec!["--no-video".to_string(), "--really-quiet".to_string()]
}

fn default_locations() -> Vec<LocationConfig> {
    vec![
        LocationConfig::new(
            "London",
            ["05:40", "12:10", "14:25", "16:00", "17:30"],
            &["13:00", "14:00"],
        ),
        LocationConfig::new(
            "Birmingham",
            ["05:55", "12:15", "14:30", "16:05", "17:40"],
            &["13:15", "14:15"],
        ),
    ]
}

fn default_reminders() -> Vec<Reminder> {
    let reminder = |arabic: &str, english: &str, source: &str| Reminder {
        arabic: arabic.to_string(),
        english: english.to_string(),
        source: source.to_string(),
    };
    vec![
        reminder(
            "إِنَّ مَعَ الْعُسْرِ يُسْرًا",
            "Indeed, with hardship comes ease.",
            "Qur’an 94:6",
        ),
        reminder(
            "فَاذْكُرُونِي أَذْكُرْكُمْ",
            "So remember Me; I will remember you.",
            "Qur’an 2:152",
        ),
        reminder(
            "وَقُل رَّبِّ زِدْنِي عِلْمًا",
            "And say: My Lord, increase me in knowledge.",
            "Qur’an 20:114",
        ),
    ]
}

fn default_events() -> Vec<CommunityEvent> {
    let event = |date: &str, title: &str, desc: &str| CommunityEvent {
        date: date.to_string(),
        title: title.to_string(),
        desc: desc.to_string(),
    };
    vec![
        event(
            "This Friday",
            "Jumu’ah Reminder",
            "Arrive early and make space for others.",
        ),
        event(
            "Weekend",
            "Beginner’s Class",
            "Foundations: prayer, wudu, and daily practice.",
        ),
        event(
            "Next Week",
            "Community Evening",
            "A short talk and a chance to meet others.",
        ),
    ]
}

fn default_recitations() -> Vec<Recitation> {
    ["Mishary Rashid Alafasy", "Abdul Rahman Al-Sudais", "Saad Al-Ghamdi"]
        .iter()
        .map(|r| Recitation {
            reciter: r.to_string(),
            audio: String::new(),
        })
        .collect()
}

/// Raw `HH:MM` strings, one per canonical prayer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrayerTable {
    pub fajr: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    pub name: String,
    #[serde(default)]
    pub jummah: Vec<String>,
    pub prayers: PrayerTable,
}

impl LocationConfig {
    fn new(name: &str, times: [&str; 5], jummah: &[&str]) -> Self {
        let [fajr, dhuhr, asr, maghrib, isha] = times.map(str::to_string);
        Self {
            name: name.to_string(),
            jummah: jummah.iter().map(|t| t.to_string()).collect(),
            prayers: PrayerTable {
                fajr,
                dhuhr,
                asr,
                maghrib,
                isha,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Location shown at startup. Unset means the first configured one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_location: Option<String>,
    /// Countdown refresh period in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Days to add/subtract from the Hijri date for local moon sighting.
    #[serde(default = "default_hijri_offset")]
    pub hijri_offset: i32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_location: None,
            tick_ms: default_tick_ms(),
            hijri_offset: default_hijri_offset(),
        }
    }
}

/// External program used to play recitations. The audio source is appended
/// as the last argument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    #[serde(default = "default_player_command")]
    pub command: String,
    #[serde(default = "default_player_args")]
    pub args: Vec<String>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            command: default_player_command(),
            args: default_player_args(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default = "default_locations")]
    pub locations: Vec<LocationConfig>,
    #[serde(default = "default_reminders")]
    pub reminders: Vec<Reminder>,
    #[serde(default = "default_events")]
    pub events: Vec<CommunityEvent>,
    #[serde(default = "default_recitations")]
    pub recitations: Vec<Recitation>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            player: PlayerConfig::default(),
            locations: default_locations(),
            reminders: default_reminders(),
            events: default_events(),
            recitations: default_recitations(),
        }
    }
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "mihrab").context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// A missing file yields the built-in defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {:?}, using built-in defaults", path);
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    /// Validate and convert the configured locations.
    pub fn resolve_locations(&self) -> Result<Vec<Location>, ConfigError> {
        if self.locations.is_empty() {
            return Err(ConfigError::NoLocations);
        }
        let mut seen = HashSet::new();
        let mut out = Vec::with_capacity(self.locations.len());
        for cfg in &self.locations {
            if !seen.insert(cfg.name.to_lowercase()) {
                return Err(ConfigError::DuplicateLocation(cfg.name.clone()));
            }
            out.push(Location::try_from(cfg)?);
        }
        Ok(out)
    }

    /// Index of the starting location: `requested` if given, otherwise the
    /// configured default, otherwise the first location. Names match
    /// case-insensitively.
    pub fn starting_location(
        &self,
        locations: &[Location],
        requested: Option<&str>,
    ) -> Result<usize, ConfigError> {
        match requested.or(self.board.default_location.as_deref()) {
            Some(name) => find_location(locations, name),
            None => Ok(0),
        }
    }
}

pub fn find_location(locations: &[Location], name: &str) -> Result<usize, ConfigError> {
    locations
        .iter()
        .position(|l| l.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| ConfigError::UnknownLocation {
            name: name.to_string(),
            available: locations
                .iter()
                .map(|l| l.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.board.default_location, None);
        assert_eq!(config.board.tick_ms, 1000);
        assert_eq!(config.locations.len(), 2);
        assert_eq!(config.reminders.len(), 3);
        assert_eq!(config.events.len(), 3);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = AppConfig::default();
        config.board.default_location = Some("Birmingham".to_string());
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.board.default_location.as_deref(), Some("Birmingham"));
        assert_eq!(loaded.locations[1].prayers.isha, "17:40");
        assert_eq!(loaded.reminders, config.reminders);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[board]
default_location = "Leeds"

[[locations]]
name = "Leeds"
jummah = ["13:30"]
[locations.prayers]
fajr = "06:00"
dhuhr = "12:20"
asr = "14:35"
maghrib = "16:10"
isha = "17:45"
"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.board.tick_ms, 1000);
        assert_eq!(config.player.command, "mpv");
        assert_eq!(config.reminders.len(), 3);

        let locations = config.resolve_locations().unwrap();
        assert_eq!(locations.len(), 1);
        assert_eq!(config.starting_location(&locations, None).unwrap(), 0);
    }

    #[test]
    fn test_locations_only_file_starts_on_first_location() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[[locations]]
name = "Leeds"
[locations.prayers]
fajr = "06:00"
dhuhr = "12:20"
asr = "14:35"
maghrib = "16:10"
isha = "17:45"

[[locations]]
name = "York"
[locations.prayers]
fajr = "06:05"
dhuhr = "12:25"
asr = "14:40"
maghrib = "16:15"
isha = "17:50"
"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.board.default_location, None);
        let locations = config.resolve_locations().unwrap();
        assert_eq!(config.starting_location(&locations, None).unwrap(), 0);
        assert_eq!(config.starting_location(&locations, Some("york")).unwrap(), 1);
    }

    #[test]
    fn test_unknown_default_location_is_error() {
        let mut config = AppConfig::default();
        config.board.default_location = Some("Leeds".to_string());
        let locations = config.resolve_locations().unwrap();
        assert!(matches!(
            config.starting_location(&locations, None),
            Err(ConfigError::UnknownLocation { .. })
        ));
    }

    #[test]
    fn test_missing_prayer_key_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[[locations]]
name = "Leeds"
[locations.prayers]
fajr = "06:00"
dhuhr = "12:20"
asr = "14:35"
maghrib = "16:10"
"#,
        )
        .unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_starting_location_is_case_insensitive() {
        let config = AppConfig::default();
        let locations = config.resolve_locations().unwrap();
        assert_eq!(config.starting_location(&locations, None).unwrap(), 0);
        assert_eq!(
            config
                .starting_location(&locations, Some("birmingham"))
                .unwrap(),
            1
        );
        let err = config
            .starting_location(&locations, Some("Paris"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownLocation { .. }));
        assert!(err.to_string().contains("London, Birmingham"));
    }

    #[test]
    fn test_resolve_rejects_empty_and_duplicates() {
        let mut config = AppConfig::default();
        config.locations.clear();
        assert!(matches!(
            config.resolve_locations(),
            Err(ConfigError::NoLocations)
        ));

        let mut config = AppConfig::default();
        let mut dup = config.locations[0].clone();
        dup.name = "LONDON".to_string();
        config.locations.push(dup);
        assert!(matches!(
            config.resolve_locations(),
            Err(ConfigError::DuplicateLocation(_))
        ));
    }
}
