//! Bounded recency windows.
//!
//! The same structure backs both the recently-skipped and the
//! recently-added trackers; only the capacity differs.

mod window;

pub use window::RecencyWindow;

/// Default capacity of the recently-skipped window.
pub const SKIPPED_CAPACITY: usize = 10;
/// Default capacity of the recently-added window.
pub const ADDED_CAPACITY: usize = 15;

#[cfg(test)]
mod tests;
