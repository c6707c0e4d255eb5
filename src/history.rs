//! Playback history (an undo stack of plays) and per-title play counts.

use std::collections::HashMap;

use crate::library::TrackId;

/// Stack of played tracks, newest on top.
#[derive(Debug, Default)]
pub struct PlaybackHistory {
    stack: Vec<TrackId>,
}

impl PlaybackHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: TrackId) {
        self.stack.push(id);
    }

    /// Pop the last play, if any.
    pub fn undo_last(&mut self) -> Option<TrackId> {
        self.stack.pop()
    }

    /// Up to `n` entries, most recent first.
    pub fn recently_played(&self, n: usize) -> Vec<TrackId> {
        self.stack.iter().rev().take(n).copied().collect()
    }

    pub fn iter_oldest_first(&self) -> impl Iterator<Item = TrackId> + '_ {
        self.stack.iter().copied()
    }

    /// Forget every play of `id`.
    pub fn purge(&mut self, id: TrackId) {
        self.stack.retain(|other| *other != id);
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

/// Play counters keyed by title. Counters only ever go up.
#[derive(Debug, Default, Clone)]
pub struct PlayCounts {
    counts: HashMap<String, u32>,
}

impl PlayCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump the counter for `title` and return the new value.
    pub fn increment(&mut self, title: &str) -> u32 {
        let count = self.counts.entry(title.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    pub fn get(&self, title: &str) -> u32 {
        self.counts.get(title).copied().unwrap_or(0)
    }

    /// Used when restoring saved counts.
    pub fn set(&mut self, title: &str, count: u32) {
        self.counts.insert(title.to_string(), count);
    }

    /// All counters, sorted by title.
    pub fn sorted(&self) -> Vec<(&str, u32)> {
        let mut all: Vec<(&str, u32)> = self
            .counts
            .iter()
            .map(|(title, count)| (title.as_str(), *count))
            .collect();
        all.sort_by(|a, b| a.0.cmp(b.0));
        all
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
