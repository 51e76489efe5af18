//! Persisted event format and file access

pub mod document;
pub mod file;

pub use document::{EventDocument, TournamentDocument};
pub use file::{from_json, read_event, to_json, write_event, WriteMode};
