//! Star-schema row types
//!
//! Dimension rows carry their natural key; the fact row carries a generated
//! surrogate id and nullable foreign keys.

use uuid::Uuid;

/// Song dimension row (one catalog song)
#[derive(Debug, Clone, PartialEq)]
pub struct SongRecord {
    pub song_id: String,
    pub title: String,
    pub artist_id: String,
    pub year: i32,
    /// Duration in seconds
    pub duration: f64,
}

/// Artist dimension row (one catalog artist)
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistRecord {
    pub artist_id: String,
    pub name: String,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Time dimension row: one distinct event timestamp, expanded in UTC
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRow {
    /// Event timestamp in epoch milliseconds (natural key)
    pub start_time: i64,
    pub hour: u32,
    pub day: u32,
    /// ISO week of year
    pub week: u32,
    pub month: u32,
    pub year: i32,
    /// Monday = 0 .. Sunday = 6
    pub weekday: u32,
}

/// User dimension row, current profile state (last write wins)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub level: String,
}

/// Song-play fact row (append-only)
///
/// `song_id` and `artist_id` are both set when natural-key resolution found
/// the played song in the dimensions, and both `None` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct SongplayFact {
    pub songplay_id: Uuid,
    pub start_time: i64,
    pub user_id: String,
    pub level: String,
    pub song_id: Option<String>,
    pub artist_id: Option<String>,
    pub session_id: i64,
    pub location: Option<String>,
    pub user_agent: Option<String>,
}
