//! Natural-key resolution of play events against loaded dimensions

use playmart_common::Result;
use sqlx::SqlitePool;

/// Look up the (song_id, artist_id) pair for a play event by natural key.
///
/// The match requires exact equality on title and artist name, and duration
/// equality as stored (no tolerance band). When several dimension rows
/// qualify the first one wins; when none do the event keeps null foreign
/// keys - a miss is expected steady-state behavior, not a failure.
///
/// Reads go through the pool, never through the in-flight file transaction,
/// so only previously committed dimension rows are visible.
pub async fn resolve_song_and_artist(
    pool: &SqlitePool,
    title: &str,
    artist_name: &str,
    duration: f64,
) -> Result<Option<(String, String)>> {
    let row = sqlx::query_as::<_, (String, String)>(
        r#"
        SELECT songs.song_id, artists.artist_id
        FROM songs
        JOIN artists ON songs.artist_id = artists.artist_id
        WHERE songs.title = ? AND artists.name = ? AND songs.duration = ?
        LIMIT 1
        "#,
    )
    .bind(title)
    .bind(artist_name)
    .bind(duration)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{artists, songs};
    use crate::models::{ArtistRecord, SongRecord};
    use sqlx::sqlite::SqlitePoolOptions;

    async fn seeded_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");
        playmart_common::db::create_tables(&pool).await.expect("Failed to create schema");

        let mut conn = pool.acquire().await.unwrap();
        songs::upsert_song(
            &mut conn,
            &SongRecord {
                song_id: "S1".to_string(),
                title: "X".to_string(),
                artist_id: "A1".to_string(),
                year: 2000,
                duration: 210.5,
            },
        )
        .await
        .unwrap();
        artists::upsert_artist(
            &mut conn,
            &ArtistRecord {
                artist_id: "A1".to_string(),
                name: "Y".to_string(),
                location: None,
                latitude: None,
                longitude: None,
            },
        )
        .await
        .unwrap();

        pool
    }

    #[tokio::test]
    async fn test_exact_match_resolves_both_ids() {
        let pool = seeded_pool().await;
        let resolved = resolve_song_and_artist(&pool, "X", "Y", 210.5).await.unwrap();
        assert_eq!(resolved, Some(("S1".to_string(), "A1".to_string())));
    }

    #[tokio::test]
    async fn test_any_field_mismatch_yields_none() {
        let pool = seeded_pool().await;

        let by_title = resolve_song_and_artist(&pool, "X2", "Y", 210.5).await.unwrap();
        assert_eq!(by_title, None);

        let by_artist = resolve_song_and_artist(&pool, "X", "Z", 210.5).await.unwrap();
        assert_eq!(by_artist, None);

        let by_duration = resolve_song_and_artist(&pool, "X", "Y", 210.51).await.unwrap();
        assert_eq!(by_duration, None);
    }

    #[tokio::test]
    async fn test_empty_dimensions_yield_none() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        playmart_common::db::create_tables(&pool).await.unwrap();

        let resolved = resolve_song_and_artist(&pool, "X", "Y", 210.5).await.unwrap();
        assert_eq!(resolved, None);
    }
}
