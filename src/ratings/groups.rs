use std::collections::BTreeMap;

use crate::library::TrackId;

use super::model::Rating;

/// Tracks grouped by rating, ascending by rating.
///
/// Each group keeps insertion order and holds a handle at most once. A track
/// may sit in more than one group.
#[derive(Debug, Default)]
pub struct RatingGroups {
    groups: BTreeMap<Rating, Vec<TrackId>>,
}

impl RatingGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` to the `rating` group. Returns false when it was already there.
    pub fn insert(&mut self, id: TrackId, rating: Rating) -> bool {
        let group = self.groups.entry(rating).or_default();
        if group.contains(&id) {
            return false;
        }
        group.push(id);
        true
    }

    /// Members of the `rating` group in insertion order; empty for an unused rating.
    pub fn search(&self, rating: Rating) -> Vec<TrackId> {
        self.groups.get(&rating).cloned().unwrap_or_default()
    }

    pub fn remove(&mut self, id: TrackId, rating: Rating) -> bool {
        let Some(group) = self.groups.get_mut(&rating) else {
            return false;
        };
        let Some(pos) = group.iter().position(|other| *other == id) else {
            return false;
        };
        group.remove(pos);
        if group.is_empty() {
            self.groups.remove(&rating);
        }
        true
    }

    /// Drop `id` from every group.
    pub fn purge(&mut self, id: TrackId) {
        self.groups.retain(|_, group| {
            group.retain(|other| *other != id);
            !group.is_empty()
        });
    }

    pub fn counts_by_rating(&self) -> BTreeMap<Rating, usize> {
        self.groups
            .iter()
            .map(|(rating, group)| (*rating, group.len()))
            .collect()
    }

    /// Ratings currently held by `id`, ascending.
    pub fn ratings_of(&self, id: TrackId) -> Vec<Rating> {
        self.groups
            .iter()
            .filter(|(_, group)| group.contains(&id))
            .map(|(rating, _)| *rating)
            .collect()
    }

    /// Every `(rating, handle)` pair, ascending by rating then insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Rating, TrackId)> + '_ {
        self.groups
            .iter()
            .flat_map(|(rating, group)| group.iter().map(move |id| (*rating, *id)))
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
