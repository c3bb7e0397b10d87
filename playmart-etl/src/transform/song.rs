//! Song metadata transformation
//!
//! One song file carries a single JSON object describing a catalog song and
//! its artist; it becomes exactly one song row and one artist row.

use crate::models::{ArtistRecord, SongMetadata, SongRecord};
use playmart_common::{Error, Result};
use std::path::Path;

/// Parse one song-metadata file into a song row and an artist row.
///
/// A malformed file (bad JSON, missing required field, wrong field shape)
/// is a parse error naming that file; it affects no other file.
pub fn transform_song_file(path: &Path) -> Result<(SongRecord, ArtistRecord)> {
    let raw = std::fs::read_to_string(path)?;

    // Producers write one object per file but occasionally pad with a
    // trailing newline; take the first non-empty line.
    let line = raw
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .ok_or_else(|| Error::parse(path, "empty song file"))?;

    let meta: SongMetadata =
        serde_json::from_str(line).map_err(|e| Error::parse(path, e.to_string()))?;

    Ok(records_from_metadata(meta))
}

/// Split one metadata record into its song and artist dimension rows
pub fn records_from_metadata(meta: SongMetadata) -> (SongRecord, ArtistRecord) {
    let song = SongRecord {
        song_id: meta.song_id,
        title: meta.title,
        artist_id: meta.artist_id.clone(),
        year: meta.year,
        duration: meta.duration,
    };
    let artist = ArtistRecord {
        artist_id: meta.artist_id,
        name: meta.artist_name,
        location: meta.artist_location,
        latitude: meta.artist_latitude,
        longitude: meta.artist_longitude,
    };
    (song, artist)
}
