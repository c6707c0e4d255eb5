//! Ordered catalog: the playlist order of the session.
//!
//! The catalog is a doubly linked list of `TrackId` handles. Links live in a
//! handle-keyed node map instead of behind pointers, so unlinking a node can
//! never leave a dangling reference behind.

mod list;

pub use list::{Catalog, Iter};
