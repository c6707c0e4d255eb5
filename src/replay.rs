//! Auto-replay: picks the most played calming tracks once the catalog has
//! been played through.

mod selector;

pub use selector::{ReplaySelector, apply_replay};

/// Genres considered calming unless configured otherwise.
pub const DEFAULT_CALMING_GENRES: [&str; 6] = ["Lo-Fi", "Jazz", "Classical", "Ambient", "Chill", "Lofi"];

/// How many tracks one auto-replay round plays by default.
pub const DEFAULT_REPLAY_COUNT: usize = 3;

#[cfg(test)]
mod tests;
