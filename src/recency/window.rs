use std::collections::VecDeque;

use crate::library::{Registry, TrackId};

/// Most-recent-first window of at most `capacity` distinct handles.
#[derive(Debug, Clone)]
pub struct RecencyWindow {
    entries: VecDeque<TrackId>,
    capacity: usize,
}

impl RecencyWindow {
    /// A zero capacity is bumped to one so a touch is always observable.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Record `id` as the most recent entry.
    ///
    /// An existing entry is moved to the front rather than duplicated; when the
    /// window overflows the oldest entry is evicted.
    pub fn touch(&mut self, id: TrackId) {
        self.remove(id);
        self.entries.push_front(id);
        if self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    pub fn contains(&self, id: TrackId) -> bool {
        self.entries.contains(&id)
    }

    /// Up to `limit` entries, most recent first.
    pub fn window(&self, limit: usize) -> Vec<TrackId> {
        self.entries.iter().take(limit).copied().collect()
    }

    /// Most recently touched entry.
    pub fn front(&self) -> Option<TrackId> {
        self.entries.front().copied()
    }

    pub fn remove(&mut self, id: TrackId) -> bool {
        match self.entries.iter().position(|other| *other == id) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Up to `limit` entries whose genre equals `genre`, in recency order.
    pub fn filter_by_genre(&self, registry: &Registry, genre: &str, limit: usize) -> Vec<TrackId> {
        let mut matched = Vec::new();
        if limit == 0 {
            return matched;
        }
        for id in &self.entries {
            let Some(track) = registry.get(*id) else {
                continue;
            };
            if track.genre == genre {
                matched.push(*id);
                if matched.len() >= limit {
                    break;
                }
            }
        }
        matched
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = TrackId> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
