use std::{env, path::PathBuf};

use log::LevelFilter;

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `SETLIST__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("SETLIST")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.recency.skipped_capacity == 0 {
            return Err("recency.skipped_capacity must be >= 1".to_string());
        }
        if self.recency.added_capacity == 0 {
            return Err("recency.added_capacity must be >= 1".to_string());
        }
        if self.replay.count == 0 {
            return Err("replay.count must be >= 1".to_string());
        }
        if self.replay.calming_genres.iter().all(|g| g.trim().is_empty()) {
            return Err("replay.calming_genres must name at least one genre".to_string());
        }
        self.log_level()?;
        Ok(())
    }

    /// Parsed `log.level`.
    pub fn log_level(&self) -> Result<LevelFilter, String> {
        self.log
            .level
            .trim()
            .parse::<LevelFilter>()
            .map_err(|_| format!("log.level '{}' is not a log level", self.log.level))
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Resolve the config path from `SETLIST_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("SETLIST_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/setlist/config.toml`
/// or `~/.config/setlist/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("setlist").join("config.toml"))
}

/// Compute the default data file under `$XDG_DATA_HOME/setlist/catalog.txt`
/// or `~/.local/share/setlist/catalog.txt`.
pub fn default_data_path() -> Option<PathBuf> {
    let data_home = if let Some(xdg) = env::var_os("XDG_DATA_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".local").join("share"))
    } else {
        None
    };

    data_home.map(|d| d.join("setlist").join("catalog.txt"))
}
