use std::collections::HashMap;

use super::model::{Track, TrackId};

/// Owner of every track in a session.
///
/// Everything else (catalog, indices, trackers, history) only stores
/// [`TrackId`]s and resolves them here.
#[derive(Debug, Default)]
pub struct Registry {
    tracks: HashMap<TrackId, Track>,
    next_id: u64,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `track` and hand back a fresh handle for it.
    pub fn insert(&mut self, track: Track) -> TrackId {
        let id = TrackId(self.next_id);
        self.next_id += 1;
        self.tracks.insert(id, track);
        id
    }

    pub fn get(&self, id: TrackId) -> Option<&Track> {
        self.tracks.get(&id)
    }

    pub fn remove(&mut self, id: TrackId) -> Option<Track> {
        self.tracks.remove(&id)
    }

    pub fn is_live(&self, id: TrackId) -> bool {
        self.tracks.contains_key(&id)
    }

    /// Resolve a list of handles, dropping any that are no longer live.
    pub fn resolve<'a>(&'a self, ids: &[TrackId]) -> Vec<&'a Track> {
        ids.iter().filter_map(|id| self.get(*id)).collect()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
