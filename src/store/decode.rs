use log::{debug, warn};

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::library::{Track, TrackId};
use crate::ratings::Rating;
use crate::session::Session;

use super::Section;

fn corrupt(line: usize, reason: impl Into<String>) -> Error {
    Error::PersistenceCorrupt {
        line,
        reason: reason.into(),
    }
}

/// Rebuild a session from the sectioned text format.
///
/// A malformed line aborts decoding with [`Error::PersistenceCorrupt`];
/// nothing from that line is applied.
pub fn decode(text: &str, settings: &Settings) -> Result<Session> {
    let mut session = Session::new(settings);
    let mut section: Option<Section> = None;

    // Recency windows are written most recent first; replay them oldest first.
    let mut skipped: Vec<TrackId> = Vec::new();
    let mut added: Vec<TrackId> = Vec::new();

    for (n, raw) in text.lines().enumerate() {
        let line_no = n + 1;
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            match Section::parse(line) {
                Some(Section::End) => break,
                Some(s) => section = Some(s),
                None => {
                    warn!("store: line {line_no}: unknown section {line}, skipping it");
                    section = None;
                }
            }
            continue;
        }

        let Some(current) = section else {
            warn!("store: line {line_no}: data outside a known section, skipped");
            continue;
        };

        match current {
            Section::Songs => {
                let track = parse_song(line).map_err(|reason| corrupt(line_no, reason))?;
                session.insert_track(track).map_err(|e| match e {
                    Error::DuplicateTitle(title) => {
                        corrupt(line_no, format!("duplicate title '{title}'"))
                    }
                    e @ Error::InvalidField { .. } => corrupt(line_no, e.to_string()),
                    other => other,
                })?;
            }
            Section::PlayCounts => {
                let (title, count) = split_pair(line, line_no)?;
                let count = count
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| corrupt(line_no, format!("play count '{count}' is not a number")))?;
                session.restore_play_count(title, count);
            }
            Section::Ratings => {
                let (title, value) = split_pair(line, line_no)?;
                let rating = value
                    .trim()
                    .parse::<u8>()
                    .ok()
                    .and_then(|v| Rating::new(v).ok())
                    .ok_or_else(|| corrupt(line_no, format!("rating '{value}' is not 1-5")))?;
                match session.title_id(title) {
                    Some(id) => session.restore_rating(id, rating),
                    None => debug!("store: line {line_no}: rating for unknown '{title}' dropped"),
                }
            }
            Section::History => match session.title_id(line) {
                Some(id) => session.restore_history(id),
                None => debug!("store: line {line_no}: history entry '{line}' dropped"),
            },
            Section::Skipped => match session.title_id(line) {
                Some(id) => skipped.push(id),
                None => debug!("store: line {line_no}: skipped entry '{line}' dropped"),
            },
            Section::RecentAdded => match session.title_id(line) {
                Some(id) => added.push(id),
                None => debug!("store: line {line_no}: recent entry '{line}' dropped"),
            },
            Section::End => break,
        }
    }

    for id in skipped.into_iter().rev() {
        session.restore_skipped(id);
    }
    for id in added.into_iter().rev() {
        session.restore_added(id);
    }

    Ok(session)
}

// Split from the right so a title may contain commas.
fn parse_song(line: &str) -> std::result::Result<Track, String> {
    let mut fields = line.rsplitn(4, ',');
    let (Some(duration), Some(genre), Some(artist), Some(title)) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err("expected title,artist,genre,duration".to_string());
    };

    if title.is_empty() {
        return Err("empty title".to_string());
    }
    let duration = duration
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("duration '{duration}' is not a whole number of seconds"))?;

    Ok(Track::new(title, artist, genre, duration))
}

fn split_pair(line: &str, line_no: usize) -> Result<(&str, &str)> {
    line.rsplit_once(',')
        .ok_or_else(|| corrupt(line_no, "expected title,value"))
}
