use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, info};

use crate::catalog::Catalog;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::history::{PlayCounts, PlaybackHistory};
use crate::index::TitleIndex;
use crate::library::{Registry, Track, TrackId};
use crate::player::{PlaybackState, Player, Step};
use crate::ratings::{Rating, RatingGroups};
use crate::recency::RecencyWindow;
use crate::replay::{ReplaySelector, apply_replay};
use crate::store;

/// What a next/previous request ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Playback {
    /// This track was played.
    Played(TrackId),
    /// The end of the catalog was reached; `replayed` lists the calming
    /// tracks auto-replay played afterwards (possibly none).
    EndReached { replayed: Vec<TrackId> },
    /// Already at the first track.
    AtStart,
    /// Nothing to play.
    Empty,
}

/// Outcome of playing the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayAll {
    pub played: Vec<TrackId>,
    pub replayed: Vec<TrackId>,
}

pub struct Session {
    registry: Registry,
    catalog: Catalog,
    titles: TitleIndex,
    ratings: RatingGroups,
    skipped: RecencyWindow,
    added: RecencyWindow,
    history: PlaybackHistory,
    counts: PlayCounts,
    player: Player,
    selector: ReplaySelector,
    replay_count: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl Session {
    /// Create an empty session sized by `settings`.
    pub fn new(settings: &Settings) -> Self {
        Self {
            registry: Registry::new(),
            catalog: Catalog::new(),
            titles: TitleIndex::new(),
            ratings: RatingGroups::new(),
            skipped: RecencyWindow::new(settings.recency.skipped_capacity),
            added: RecencyWindow::new(settings.recency.added_capacity),
            history: PlaybackHistory::new(),
            counts: PlayCounts::new(),
            player: Player::new(),
            selector: ReplaySelector::new(&settings.replay.calming_genres),
            replay_count: settings.replay.count,
        }
    }

    /// Load a session from `path`; a missing file gives an empty session.
    pub fn load(path: &Path, settings: &Settings) -> Result<Self> {
        store::load(path, settings)
    }

    /// Write the session to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        store::save(self, path)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ratings(&self) -> &RatingGroups {
        &self.ratings
    }

    pub fn skipped_window(&self) -> &RecencyWindow {
        &self.skipped
    }

    pub fn added_window(&self) -> &RecencyWindow {
        &self.added
    }

    pub fn history(&self) -> &PlaybackHistory {
        &self.history
    }

    pub fn play_counts(&self) -> &PlayCounts {
        &self.counts
    }

    pub fn player_state(&self) -> PlaybackState {
        self.player.state()
    }

    pub fn selector(&self) -> &ReplaySelector {
        &self.selector
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.registry.get(id)
    }

    /// Catalog order, resolved.
    pub fn tracks(&self) -> Vec<(TrackId, &Track)> {
        self.catalog
            .iter()
            .filter_map(|id| self.registry.get(id).map(|t| (id, t)))
            .collect()
    }

    pub fn lookup(&self, title: &str) -> Option<(TrackId, &Track)> {
        let id = self.titles.lookup(title)?;
        self.registry.get(id).map(|t| (id, t))
    }

    fn require(&self, title: &str) -> Result<TrackId> {
        self.lookup(title)
            .map(|(id, _)| id)
            .ok_or_else(|| Error::UnknownTitle(title.to_string()))
    }

    fn resolve(&self, ids: &[TrackId]) -> Vec<&Track> {
        self.registry.resolve(ids)
    }

    /// Add a track at the end of the catalog and mark it as recently added.
    pub fn add_track(&mut self, track: Track) -> Result<TrackId> {
        let id = self.insert_track(track)?;
        self.added.touch(id);
        Ok(id)
    }

    /// Register and append without touching the recently-added window.
    pub(crate) fn insert_track(&mut self, track: Track) -> Result<TrackId> {
        track.check_fields()?;
        if self.titles.lookup(&track.title).is_some() {
            return Err(Error::DuplicateTitle(track.title));
        }
        let title = track.title.clone();
        let id = self.registry.insert(track);
        self.catalog.append(id);
        self.titles.register(&title, id);
        debug!("session: added '{}' as {}", title, id);
        Ok(id)
    }

    /// Remove the track at `index` and every reference to it.
    ///
    /// Out-of-range indices are a no-op. Play counts are kept.
    pub fn remove_at(&mut self, index: usize) -> Option<Track> {
        let id = self.catalog.remove_at(index)?;
        self.player.on_removed(index);

        self.ratings.purge(id);
        self.skipped.remove(id);
        self.added.remove(id);
        self.history.purge(id);

        let track = self.registry.remove(id)?;
        self.titles.unregister(&track.title, id);
        info!("session: removed '{}' from position {}", track.title, index);
        Some(track)
    }

    /// Move the entry at `from` so it ends up at `to`.
    pub fn move_track(&mut self, from: usize, to: usize) {
        let playing = self.current_id();
        self.catalog.move_to(from, to);
        self.follow(playing);
        debug!("session: moved {} -> {}", from, to);
    }

    pub fn reverse(&mut self) {
        let playing = self.current_id();
        self.catalog.reverse();
        self.follow(playing);
        debug!("session: reversed {} tracks", self.catalog.len());
    }

    fn current_id(&self) -> Option<TrackId> {
        self.player.current_index().and_then(|i| self.catalog.get(i))
    }

    // Keep the player on the same track after a reorder.
    fn follow(&mut self, playing: Option<TrackId>) {
        if let Some(pos) = playing.and_then(|id| self.catalog.position(id)) {
            self.player.seek(pos);
        }
    }

    pub fn rate(&mut self, title: &str, rating: Rating) -> Result<()> {
        let id = self.require(title)?;
        self.ratings.insert(id, rating);
        debug!("session: rated '{}' {} stars", title, rating);
        Ok(())
    }

    /// Take `rating` away from `title`. Returns whether it held that rating.
    pub fn unrate(&mut self, title: &str, rating: Rating) -> Result<bool> {
        let id = self.require(title)?;
        Ok(self.ratings.remove(id, rating))
    }

    pub fn tracks_with_rating(&self, rating: Rating) -> Vec<&Track> {
        self.resolve(&self.ratings.search(rating))
    }

    pub fn counts_by_rating(&self) -> BTreeMap<Rating, usize> {
        self.ratings.counts_by_rating()
    }

    fn record_play(&mut self, id: TrackId) -> u32 {
        let Some(track) = self.registry.get(id) else {
            return 0;
        };
        self.history.push(id);
        self.counts.increment(&track.title)
    }

    /// Play one track by title. Returns its new play count.
    pub fn play_title(&mut self, title: &str) -> Result<u32> {
        let id = self.require(title)?;
        Ok(self.record_play(id))
    }

    pub fn play_next(&mut self) -> Playback {
        match self.player.play_next(self.catalog.len()) {
            Step::Played(index) => self.played_at(index),
            Step::EndReached => Playback::EndReached {
                replayed: self.auto_replay(),
            },
            Step::AtStart => Playback::AtStart,
            Step::Empty => Playback::Empty,
        }
    }

    pub fn play_previous(&mut self) -> Playback {
        match self.player.play_previous(self.catalog.len()) {
            Step::Played(index) => self.played_at(index),
            Step::EndReached => Playback::EndReached { replayed: vec![] },
            Step::AtStart => Playback::AtStart,
            Step::Empty => Playback::Empty,
        }
    }

    fn played_at(&mut self, index: usize) -> Playback {
        match self.catalog.get(index) {
            Some(id) => {
                self.record_play(id);
                Playback::Played(id)
            }
            None => {
                self.player.stop();
                Playback::Empty
            }
        }
    }

    /// Play the whole catalog in order, then run auto-replay.
    pub fn play_all(&mut self) -> PlayAll {
        let order = self.catalog.snapshot();
        let mut played = Vec::with_capacity(order.len());
        for index in self.player.play_all(order.len()) {
            let id = order[index];
            self.record_play(id);
            played.push(id);
        }
        if played.is_empty() {
            return PlayAll::default();
        }
        let replayed = self.auto_replay();
        PlayAll { played, replayed }
    }

    /// The calming tracks auto-replay would pick right now.
    pub fn calming_picks(&self) -> Vec<TrackId> {
        self.selector.top_calming(
            &self.catalog.snapshot(),
            &self.registry,
            &self.counts,
            &self.skipped,
            self.replay_count,
        )
    }

    /// Pick and play the top calming tracks. Returns what was played.
    pub fn auto_replay(&mut self) -> Vec<TrackId> {
        let picks = self.calming_picks();
        let n = apply_replay(&picks, &self.registry, &mut self.history, &mut self.counts);
        info!("session: auto-replay played {} calming tracks", n);
        picks
    }

    /// Position and track the player is on.
    pub fn current(&self) -> Option<(usize, &Track)> {
        let index = self.player.current_index()?;
        let id = self.catalog.get(index)?;
        self.registry.get(id).map(|t| (index, t))
    }

    /// Pop the last play off the history. Play counts are left alone.
    pub fn undo_last_play(&mut self) -> Option<&Track> {
        loop {
            let id = self.history.undo_last()?;
            if self.registry.is_live(id) {
                return self.registry.get(id);
            }
        }
    }

    pub fn recently_played(&self, n: usize) -> Vec<&Track> {
        self.resolve(&self.history.recently_played(n))
    }

    pub fn skip(&mut self, title: &str) -> Result<()> {
        let id = self.require(title)?;
        self.skipped.touch(id);
        debug!("session: skipped '{}' ({} in window)", title, self.skipped.len());
        Ok(())
    }

    pub fn skipped(&self) -> Vec<&Track> {
        self.resolve(&self.skipped.window(self.skipped.capacity()))
    }

    pub fn clear_skipped(&mut self) {
        self.skipped.clear();
        info!("session: cleared skip history");
    }

    pub fn recently_added(&self, limit: usize) -> Vec<&Track> {
        self.resolve(&self.added.window(limit))
    }

    pub fn last_added(&self) -> Option<&Track> {
        self.added.front().and_then(|id| self.registry.get(id))
    }

    pub fn recently_added_by_genre(&self, genre: &str, limit: usize) -> Vec<&Track> {
        self.resolve(&self.added.filter_by_genre(&self.registry, genre, limit))
    }

    pub fn clear_recently_added(&mut self) {
        self.added.clear();
        info!("session: cleared recently added");
    }

    pub(crate) fn restore_play_count(&mut self, title: &str, count: u32) {
        self.counts.set(title, count);
    }

    pub(crate) fn restore_rating(&mut self, id: TrackId, rating: Rating) {
        self.ratings.insert(id, rating);
    }

    pub(crate) fn restore_history(&mut self, id: TrackId) {
        self.history.push(id);
    }

    pub(crate) fn restore_skipped(&mut self, id: TrackId) {
        self.skipped.touch(id);
    }

    pub(crate) fn restore_added(&mut self, id: TrackId) {
        self.added.touch(id);
    }

    pub(crate) fn title_id(&self, title: &str) -> Option<TrackId> {
        self.lookup(title).map(|(id, _)| id)
    }
}
