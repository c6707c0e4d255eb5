//! setlist: an in-memory music catalog with ratings, recency tracking and
//! auto-replay of calming tracks, persisted to a flat sectioned text file.

pub mod catalog;
pub mod config;
pub mod error;
pub mod history;
pub mod index;
pub mod library;
pub mod player;
pub mod ratings;
pub mod recency;
pub mod replay;
pub mod runtime;
pub mod session;
pub mod store;

pub use error::{Error, Result};
pub use session::Session;
