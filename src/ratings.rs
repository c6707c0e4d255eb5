//! Star ratings and the per-rating track groups.
//!
//! Ratings are validated when a `Rating` is constructed, so the groups
//! themselves never see a value outside 1-5.

mod groups;
mod model;

pub use groups::RatingGroups;
pub use model::Rating;
