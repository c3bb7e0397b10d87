//! Raw source record shapes (producer contract)

use serde::Deserialize;

/// Marker in an event's `page` field identifying a song play
pub const SONG_PLAY_PAGE: &str = "NextSong";

/// One song-metadata record: a single JSON object per source file
#[derive(Debug, Clone, Deserialize)]
pub struct SongMetadata {
    pub song_id: String,
    pub title: String,
    pub artist_id: String,
    pub artist_name: String,
    #[serde(default)]
    pub artist_location: Option<String>,
    #[serde(default)]
    pub artist_latitude: Option<f64>,
    #[serde(default)]
    pub artist_longitude: Option<f64>,
    /// The producer writes 0 for unknown years
    #[serde(default)]
    pub year: i32,
    pub duration: f64,
}

/// One listening event from a log file (one JSON object per line).
///
/// Only lines whose `page` field equals [`SONG_PLAY_PAGE`] are deserialized
/// into this shape; other event types carry fewer fields and are discarded
/// before strict parsing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayEvent {
    /// Event timestamp in epoch milliseconds
    pub ts: i64,
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    /// Subscription level at event time ("free" or "paid")
    pub level: String,
    /// Song title as reported by the player
    pub song: String,
    /// Artist name as reported by the player
    pub artist: String,
    /// Track length in seconds
    pub length: f64,
    pub session_id: i64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

/// User identifiers arrive as JSON strings or bare numbers depending on the
/// producer version; both are accepted and normalized to a string key.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Text(String),
    Numeric(i64),
}

impl UserId {
    pub fn as_key(&self) -> String {
        match self {
            UserId::Text(s) => s.clone(),
            UserId::Numeric(n) => n.to_string(),
        }
    }
}
