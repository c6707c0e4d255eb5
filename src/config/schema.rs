use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::recency::{ADDED_CAPACITY, SKIPPED_CAPACITY};
use crate::replay::{DEFAULT_CALMING_GENRES, DEFAULT_REPLAY_COUNT};

use super::load::default_data_path;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/setlist/config.toml` or `~/.config/setlist/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SETLIST__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
    pub recency: RecencySettings,
    pub replay: ReplaySettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Where the catalog is loaded from on startup and saved to on exit.
    pub data_file: PathBuf,
    /// Save after every command that changes the catalog.
    pub autosave: bool,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_file: default_data_path().unwrap_or_else(|| PathBuf::from("setlist_data.txt")),
            autosave: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RecencySettings {
    /// How many skipped tracks are remembered (and kept out of auto-replay).
    pub skipped_capacity: usize,
    /// How many recently added tracks are remembered.
    pub added_capacity: usize,
}

impl Default for RecencySettings {
    fn default() -> Self {
        Self {
            skipped_capacity: SKIPPED_CAPACITY,
            added_capacity: ADDED_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReplaySettings {
    /// Number of tracks played by one auto-replay round.
    pub count: usize,
    /// Genres eligible for auto-replay (compared case-insensitively).
    pub calming_genres: Vec<String>,
}

impl Default for ReplaySettings {
    fn default() -> Self {
        Self {
            count: DEFAULT_REPLAY_COUNT,
            calming_genres: DEFAULT_CALMING_GENRES.iter().map(|g| g.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// Which track fields make up a listed track, and in what order.
    ///
    /// Example: ["artist", "title"] -> "Artist - Title"
    pub display_fields: Vec<TrackDisplayField>,
    /// Separator used to join `display_fields`.
    pub display_separator: String,
    /// Entries shown under "recently played" in the snapshot.
    pub recently_played_limit: usize,
    /// Entries shown by the `recent` command.
    pub recently_added_limit: usize,
    /// Entries shown under "longest tracks" in the snapshot.
    pub longest_limit: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            display_fields: vec![TrackDisplayField::Title, TrackDisplayField::Artist],
            display_separator: " - ".to_string(),
            recently_played_limit: 5,
            recently_added_limit: 10,
            longest_limit: 5,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackDisplayField {
    Title,
    Artist,
    Genre,
    #[serde(alias = "length")]
    Duration,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
