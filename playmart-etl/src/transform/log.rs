//! Listening-log transformation
//!
//! Filters one event-log file down to song plays and assembles the rows the
//! loader will apply: distinct time rows, one user row per listener (later
//! event wins), and an ordered list of fact rows with resolved foreign keys.

use crate::db::resolve;
use crate::models::records::SONG_PLAY_PAGE;
use crate::models::{PlayEvent, SongplayFact, TimeRow, UserRecord};
use crate::transform::time::derive_time_row;
use playmart_common::{Error, Result};
use sqlx::SqlitePool;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use uuid::Uuid;

/// Rows assembled from one log file, not yet applied to the store
#[derive(Debug, Default)]
pub struct LogBatch {
    /// Distinct time rows, in first-occurrence order
    pub time_rows: Vec<TimeRow>,
    /// One row per distinct user seen in the file
    pub users: Vec<UserRecord>,
    /// One fact per retained event, in file order
    pub songplays: Vec<SongplayFact>,
}

/// Transform one event-log file into dimension and fact rows.
///
/// Non-play events (navigation, login, help pages) are discarded before
/// strict parsing - they carry fewer fields and contribute nothing. Foreign
/// keys are resolved against committed dimension state through `pool`; the
/// rows assembled here are side-effect free until the loader applies them.
pub async fn transform_log_file(pool: &SqlitePool, path: &Path) -> Result<LogBatch> {
    let raw = std::fs::read_to_string(path)?;

    let mut seen_timestamps = HashSet::new();
    let mut users: HashMap<String, UserRecord> = HashMap::new();
    let mut batch = LogBatch::default();

    for (index, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let value: serde_json::Value = serde_json::from_str(line)
            .map_err(|e| Error::parse(path, format!("line {}: {}", index + 1, e)))?;

        if value.get("page").and_then(|p| p.as_str()) != Some(SONG_PLAY_PAGE) {
            continue;
        }

        let event: PlayEvent = serde_json::from_value(value)
            .map_err(|e| Error::parse(path, format!("line {}: {}", index + 1, e)))?;

        let time_row = derive_time_row(event.ts).ok_or_else(|| {
            Error::parse(path, format!("line {}: timestamp {} out of range", index + 1, event.ts))
        })?;
        if seen_timestamps.insert(event.ts) {
            batch.time_rows.push(time_row);
        }

        let user_id = event.user_id.as_key();
        users.insert(
            user_id.clone(),
            UserRecord {
                user_id: user_id.clone(),
                first_name: event.first_name.clone(),
                last_name: event.last_name.clone(),
                gender: event.gender.clone(),
                level: event.level.clone(),
            },
        );

        let resolved =
            resolve::resolve_song_and_artist(pool, &event.song, &event.artist, event.length)
                .await?;
        let (song_id, artist_id) = match resolved {
            Some((song_id, artist_id)) => (Some(song_id), Some(artist_id)),
            None => (None, None),
        };

        batch.songplays.push(SongplayFact {
            songplay_id: Uuid::new_v4(),
            start_time: event.ts,
            user_id,
            level: event.level,
            song_id,
            artist_id,
            session_id: event.session_id,
            location: event.location,
            user_agent: event.user_agent,
        });
    }

    batch.users = users.into_values().collect();

    Ok(batch)
}
