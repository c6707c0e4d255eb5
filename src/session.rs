//! Session module: one explicit context owning the whole catalog engine.
//!
//! `Session` holds the registry, the ordered catalog, the title index, the
//! rating groups, both recency windows, the playback history and the play
//! counts. Removing a track goes through here so every holder of its handle
//! is swept in the same call.

mod model;
mod report;

pub use model::*;
pub use report::{Report, SortKey, genre_breakdown};
