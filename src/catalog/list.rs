use std::collections::HashMap;
use std::mem;

use crate::library::TrackId;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
struct Links {
    prev: Option<TrackId>,
    next: Option<TrackId>,
}

/// Doubly linked, handle-addressed track order.
///
/// Positional edits (`remove_at`, `move_to`) silently ignore out-of-range
/// indices; callers that need feedback check [`Catalog::len`] first.
#[derive(Debug, Default)]
pub struct Catalog {
    nodes: HashMap<TrackId, Links>,
    head: Option<TrackId>,
    tail: Option<TrackId>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: TrackId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Add `id` at the end. A handle that is already linked is left where it is.
    pub fn append(&mut self, id: TrackId) {
        if self.nodes.contains_key(&id) {
            return;
        }
        self.nodes.insert(id, Links::default());
        self.link_back(id);
    }

    /// Handle at a 0-based position.
    pub fn get(&self, index: usize) -> Option<TrackId> {
        self.iter().nth(index)
    }

    pub fn position(&self, id: TrackId) -> Option<usize> {
        if !self.contains(id) {
            return None;
        }
        self.iter().position(|other| other == id)
    }

    pub fn front(&self) -> Option<TrackId> {
        self.head
    }

    pub fn back(&self) -> Option<TrackId> {
        self.tail
    }

    /// Remove the element at `index`, returning its handle.
    ///
    /// Out-of-range indices and an empty catalog are a no-op.
    pub fn remove_at(&mut self, index: usize) -> Option<TrackId> {
        let id = self.get(index)?;
        self.remove(id);
        Some(id)
    }

    /// Remove `id` wherever it sits. Returns whether it was present.
    pub fn remove(&mut self, id: TrackId) -> bool {
        if !self.unlink(id) {
            return false;
        }
        self.nodes.remove(&id);
        true
    }

    /// Move the element at `from` so that it ends up at index `to`.
    ///
    /// `to` is read against the list with the element already taken out: the
    /// element is linked in front of whatever sits at `to`, or at the tail when
    /// `to` is past the end. A forward move is therefore not shifted down by
    /// one: `move_to(0, 2)` on `[A, B, C]` gives `[B, C, A]`, not `[B, A, C]`.
    pub fn move_to(&mut self, from: usize, to: usize) {
        if from == to || self.is_empty() {
            return;
        }
        let Some(id) = self.get(from) else {
            return;
        };

        self.unlink(id);
        match self.get(to) {
            Some(anchor) => self.link_before(id, anchor),
            None => self.link_back(id),
        }
    }

    /// Reverse the order in place in a single pass.
    pub fn reverse(&mut self) {
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let Some(links) = self.nodes.get_mut(&id) else {
                break;
            };
            mem::swap(&mut links.prev, &mut links.next);
            // `prev` now holds the old `next`.
            cursor = links.prev;
        }
        mem::swap(&mut self.head, &mut self.tail);
    }

    /// Materialize the current order.
    pub fn snapshot(&self) -> Vec<TrackId> {
        self.iter().collect()
    }

    /// Walk from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
            forward: true,
        }
    }

    /// Walk from tail to head.
    pub fn iter_rev(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            cursor: self.tail,
            forward: false,
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    // Detach `id` from its neighbours but keep its node entry.
    fn unlink(&mut self, id: TrackId) -> bool {
        let Some(links) = self.nodes.get(&id).copied() else {
            return false;
        };

        match links.prev {
            Some(p) => self.set_next(p, links.next),
            None => self.head = links.next,
        }
        match links.next {
            Some(n) => self.set_prev(n, links.prev),
            None => self.tail = links.prev,
        }

        if let Some(node) = self.nodes.get_mut(&id) {
            *node = Links::default();
        }
        true
    }

    fn link_back(&mut self, id: TrackId) {
        let prev = self.tail;
        if let Some(node) = self.nodes.get_mut(&id) {
            *node = Links { prev, next: None };
        }
        match prev {
            Some(t) => self.set_next(t, Some(id)),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    fn link_before(&mut self, id: TrackId, anchor: TrackId) {
        let prev = self.nodes.get(&anchor).and_then(|l| l.prev);
        if let Some(node) = self.nodes.get_mut(&id) {
            *node = Links {
                prev,
                next: Some(anchor),
            };
        }
        self.set_prev(anchor, Some(id));
        match prev {
            Some(p) => self.set_next(p, Some(id)),
            None => self.head = Some(id),
        }
    }

    fn set_next(&mut self, id: TrackId, next: Option<TrackId>) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.next = next;
        }
    }

    fn set_prev(&mut self, id: TrackId, prev: Option<TrackId>) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.prev = prev;
        }
    }
}

/// Borrowing traversal over catalog handles, in either direction.
pub struct Iter<'a> {
    nodes: &'a HashMap<TrackId, Links>,
    cursor: Option<TrackId>,
    forward: bool,
}

impl Iterator for Iter<'_> {
    type Item = TrackId;

    fn next(&mut self) -> Option<TrackId> {
        let id = self.cursor?;
        let links = self.nodes.get(&id)?;
        self.cursor = if self.forward { links.next } else { links.prev };
        Some(id)
    }
}
