use std::fmt;

use crate::error::{Error, Result};

/// Stable handle to a track owned by the [`Registry`](super::Registry).
///
/// Handles are never reused, so a handle kept after its track was removed
/// simply stops resolving.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub(crate) u64);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub genre: String,
    /// Length in whole seconds.
    pub duration: u32,
}

impl Track {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        genre: impl Into<String>,
        duration: u32,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            genre: genre.into(),
            duration,
        }
    }

    /// Reject values the data file cannot hold: a blank title, a title that
    /// reads as a section header, commas in artist or genre, line breaks.
    pub fn check_fields(&self) -> Result<()> {
        let invalid = |field: &'static str, reason: &str| -> Result<()> {
            Err(Error::InvalidField {
                field,
                reason: reason.to_string(),
            })
        };

        if self.title.trim().is_empty() {
            return invalid("title", "must not be empty");
        }
        if self.title.starts_with('[') && self.title.ends_with(']') {
            return invalid("title", "must not be wrapped in [brackets]");
        }
        for (field, value) in [
            ("title", &self.title),
            ("artist", &self.artist),
            ("genre", &self.genre),
        ] {
            if value.contains(['\n', '\r']) {
                return invalid(field, "must not contain line breaks");
            }
        }
        if self.artist.contains(',') {
            return invalid("artist", "must not contain commas");
        }
        if self.genre.contains(',') {
            return invalid("genre", "must not contain commas");
        }
        Ok(())
    }

    /// Format duration as M:SS.
    pub fn duration_display(&self) -> String {
        format!("{}:{:02}", self.duration / 60, self.duration % 60)
    }
}
