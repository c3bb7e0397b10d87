//! Data models for the playmart loader

pub mod records;
pub mod rows;

pub use records::{PlayEvent, SongMetadata, UserId};
pub use rows::{ArtistRecord, SongRecord, SongplayFact, TimeRow, UserRecord};
