//! Artist dimension operations

use crate::models::ArtistRecord;
use playmart_common::Result;
use sqlx::SqliteConnection;

/// Insert an artist dimension row; an existing natural key is left untouched.
pub async fn upsert_artist(conn: &mut SqliteConnection, artist: &ArtistRecord) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO artists (artist_id, name, location, latitude, longitude)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT(artist_id) DO NOTHING
        "#,
    )
    .bind(&artist.artist_id)
    .bind(&artist.name)
    .bind(&artist.location)
    .bind(artist.latitude)
    .bind(artist.longitude)
    .execute(conn)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");
        playmart_common::db::create_tables(&pool).await.expect("Failed to create schema");
        pool
    }

    #[tokio::test]
    async fn test_upsert_artist_is_idempotent() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let artist = ArtistRecord {
            artist_id: "ARD7TVE1187B99BFB1".to_string(),
            name: "Casual".to_string(),
            location: Some("California - LA".to_string()),
            latitude: None,
            longitude: None,
        };

        upsert_artist(&mut conn, &artist).await.unwrap();
        upsert_artist(&mut conn, &artist).await.unwrap();
        drop(conn);

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM artists")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_upsert_artist_stores_nullable_coordinates() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let artist = ArtistRecord {
            artist_id: "AR1".to_string(),
            name: "Somebody".to_string(),
            location: None,
            latitude: Some(35.14968),
            longitude: Some(-90.04892),
        };
        upsert_artist(&mut conn, &artist).await.unwrap();
        drop(conn);

        let (latitude, longitude): (Option<f64>, Option<f64>) =
            sqlx::query_as("SELECT latitude, longitude FROM artists WHERE artist_id = 'AR1'")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(latitude, Some(35.14968));
        assert_eq!(longitude, Some(-90.04892));
    }
}
