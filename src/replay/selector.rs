use log::debug;

use crate::history::{PlayCounts, PlaybackHistory};
use crate::library::{Registry, TrackId};
use crate::recency::RecencyWindow;

use super::DEFAULT_CALMING_GENRES;

/// Ranks candidate tracks for auto-replay. Never mutates what it reads.
#[derive(Debug, Clone)]
pub struct ReplaySelector {
    calming: Vec<String>,
}

impl Default for ReplaySelector {
    fn default() -> Self {
        Self::new(DEFAULT_CALMING_GENRES)
    }
}

impl ReplaySelector {
    pub fn new<I, S>(calming_genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            calming: calming_genres
                .into_iter()
                .map(|g| g.as_ref().trim().to_string())
                .filter(|g| !g.is_empty())
                .collect(),
        }
    }

    /// Case-insensitive membership in the calming genre set.
    pub fn is_calming(&self, genre: &str) -> bool {
        let genre = genre.trim();
        self.calming.iter().any(|c| c.eq_ignore_ascii_case(genre))
    }

    /// Up to `k` calming tracks from `all`, most played first.
    ///
    /// Tracks in the `skipped` window are never returned. Equal play counts
    /// keep their order in `all`.
    pub fn top_calming(
        &self,
        all: &[TrackId],
        registry: &Registry,
        counts: &PlayCounts,
        skipped: &RecencyWindow,
        k: usize,
    ) -> Vec<TrackId> {
        let mut candidates: Vec<(u32, TrackId)> = all
            .iter()
            .filter_map(|id| {
                let track = registry.get(*id)?;
                if self.is_calming(&track.genre) && !skipped.contains(*id) {
                    Some((counts.get(&track.title), *id))
                } else {
                    None
                }
            })
            .collect();

        debug!(
            "replay: {} calming candidates out of {} tracks",
            candidates.len(),
            all.len()
        );

        // `sort_by` is stable, which is what keeps catalog order on ties.
        candidates.sort_by(|a, b| b.0.cmp(&a.0));
        candidates.into_iter().take(k).map(|(_, id)| id).collect()
    }

    pub fn genres(&self) -> &[String] {
        &self.calming
    }
}

/// Record one play event per selected track. Returns how many were played.
pub fn apply_replay(
    selected: &[TrackId],
    registry: &Registry,
    history: &mut PlaybackHistory,
    counts: &mut PlayCounts,
) -> usize {
    let mut played = 0;
    for id in selected {
        let Some(track) = registry.get(*id) else {
            continue;
        };
        history.push(*id);
        let n = counts.increment(&track.title);
        debug!("replay: '{}' now at {} plays", track.title, n);
        played += 1;
    }
    played
}
