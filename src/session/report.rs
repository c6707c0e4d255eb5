//! Read-only views over a session: the analytics report and sorted listings.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::library::Track;
use crate::ratings::Rating;

use super::model::Session;

/// Point-in-time summary of a session.
#[derive(Debug)]
pub struct Report<'a> {
    /// Longest tracks first; equal lengths keep catalog order.
    pub longest: Vec<&'a Track>,
    /// Most recent first.
    pub recently_played: Vec<&'a Track>,
    pub counts_by_rating: BTreeMap<Rating, usize>,
    /// Sorted by title.
    pub play_counts: Vec<(&'a str, u32)>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Duration,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "duration" | "length" => Ok(Self::Duration),
            other => Err(format!("unknown sort key '{other}' (expected title or duration)")),
        }
    }
}

impl Session {
    pub fn report(&self, longest_limit: usize, recent_limit: usize) -> Report<'_> {
        let mut longest: Vec<&Track> = self.tracks().into_iter().map(|(_, t)| t).collect();
        longest.sort_by(|a, b| b.duration.cmp(&a.duration));
        longest.truncate(longest_limit);

        Report {
            longest,
            recently_played: self.recently_played(recent_limit),
            counts_by_rating: self.counts_by_rating(),
            play_counts: self.play_counts().sorted(),
        }
    }

    /// Catalog contents sorted by `key`, ascending. The catalog itself is untouched.
    pub fn sorted(&self, key: SortKey) -> Vec<&Track> {
        let mut tracks: Vec<&Track> = self.tracks().into_iter().map(|(_, t)| t).collect();
        match key {
            SortKey::Title => tracks.sort_by(|a, b| a.title.cmp(&b.title)),
            SortKey::Duration => tracks.sort_by_key(|t| t.duration),
        }
        tracks
    }
}

/// How many of `tracks` fall in each genre.
pub fn genre_breakdown(tracks: &[&Track]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for t in tracks {
        *counts.entry(t.genre.clone()).or_insert(0) += 1;
    }
    counts
}
