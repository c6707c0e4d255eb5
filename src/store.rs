//! Flat-file persistence of a session.
//!
//! The format is line oriented and split into tagged sections:
//!
//! ```text
//! [SONGS]          title,artist,genre,duration
//! [PLAY_COUNTS]    title,count
//! [RATINGS]        title,rating
//! [HISTORY]        title            (oldest first)
//! [SKIPPED]        title            (most recent first)
//! [RECENT_ADDED]   title            (most recent first)
//! [END]
//! ```
//!
//! Fields are not escaped. Songs are read before anything that refers to a
//! title, and titles that no longer resolve are dropped quietly.

mod decode;
mod encode;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::info;

use crate::config::Settings;
use crate::error::Result;
use crate::session::Session;

pub use decode::decode;
pub use encode::encode;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Section {
    Songs,
    PlayCounts,
    Ratings,
    History,
    Skipped,
    RecentAdded,
    End,
}

impl Section {
    fn header(self) -> &'static str {
        match self {
            Self::Songs => "[SONGS]",
            Self::PlayCounts => "[PLAY_COUNTS]",
            Self::Ratings => "[RATINGS]",
            Self::History => "[HISTORY]",
            Self::Skipped => "[SKIPPED]",
            Self::RecentAdded => "[RECENT_ADDED]",
            Self::End => "[END]",
        }
    }

    fn parse(line: &str) -> Option<Self> {
        [
            Self::Songs,
            Self::PlayCounts,
            Self::Ratings,
            Self::History,
            Self::Skipped,
            Self::RecentAdded,
            Self::End,
        ]
        .into_iter()
        .find(|s| s.header() == line.trim())
    }
}

/// Read a session from `path`. A missing file yields an empty session.
pub fn load(path: &Path, settings: &Settings) -> Result<Session> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("store: no data file at {}, starting fresh", path.display());
            return Ok(Session::new(settings));
        }
        Err(e) => return Err(e.into()),
    };

    let session = decode(&text, settings)?;
    info!(
        "store: loaded {} tracks from {}",
        session.len(),
        path.display()
    );
    Ok(session)
}

/// Write `session` to `path`, replacing the previous file in one rename.
pub fn save(session: &Session, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, encode(session))?;
    fs::rename(&tmp, path)?;

    info!("store: saved {} tracks to {}", session.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests;
