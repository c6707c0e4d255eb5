//! Title index: O(1) lookup from a track title to its handle.

use std::collections::HashMap;

use crate::library::TrackId;

#[derive(Debug, Default)]
pub struct TitleIndex {
    by_title: HashMap<String, TrackId>,
}

impl TitleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `title` to `id`, replacing any previous mapping.
    pub fn register(&mut self, title: &str, id: TrackId) {
        self.by_title.insert(title.to_string(), id);
    }

    pub fn lookup(&self, title: &str) -> Option<TrackId> {
        self.by_title.get(title).copied()
    }

    /// Drop the mapping for `title`, but only while it still points at `id`.
    pub fn unregister(&mut self, title: &str, id: TrackId) -> bool {
        if self.lookup(title) == Some(id) {
            self.by_title.remove(title);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.by_title.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_title.is_empty()
    }
}
