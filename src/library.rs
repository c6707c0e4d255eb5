//! Track registry and track metadata.
//!
//! The registry is the only owner of `Track` values; the rest of the crate
//! addresses tracks through `TrackId` handles.

mod display;
mod model;
mod registry;

pub use display::display_from_fields;
pub use model::{Track, TrackId};
pub use registry::Registry;
