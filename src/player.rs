//! Player module: the playback position over the catalog.
//!
//! The player only tracks an index; turning a successful step into a play
//! event (history push, play count) is up to the caller.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
