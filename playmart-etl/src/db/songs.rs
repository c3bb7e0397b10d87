//! Song dimension operations

use crate::models::SongRecord;
use playmart_common::Result;
use sqlx::SqliteConnection;

/// Insert a song dimension row.
///
/// Songs are immutable once loaded: re-inserting the same natural key is a
/// no-op, so reprocessing a source file neither duplicates nor errors.
pub async fn upsert_song(conn: &mut SqliteConnection, song: &SongRecord) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO songs (song_id, title, artist_id, year, duration)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT(song_id) DO NOTHING
        "#,
    )
    .bind(&song.song_id)
    .bind(&song.title)
    .bind(&song.artist_id)
    .bind(song.year)
    .bind(song.duration)
    .execute(conn)
    .await?;

    Ok(())
}
