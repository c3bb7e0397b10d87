//! Time dimension operations

use crate::models::TimeRow;
use playmart_common::Result;
use sqlx::SqliteConnection;

/// Insert a time dimension row.
///
/// The same timestamp recurs across log files; derivation is deterministic,
/// so a conflicting row is byte-identical and the insert becomes a no-op.
pub async fn upsert_time_row(conn: &mut SqliteConnection, row: &TimeRow) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO time (start_time, hour, day, week, month, year, weekday)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(start_time) DO NOTHING
        "#,
    )
    .bind(row.start_time)
    .bind(row.hour)
    .bind(row.day)
    .bind(row.week)
    .bind(row.month)
    .bind(row.year)
    .bind(row.weekday)
    .execute(conn)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::derive_time_row;
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
    async fn test_duplicate_timestamp_does_not_error() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let row = derive_time_row(1_541_121_934_796).unwrap();
        upsert_time_row(&mut conn, &row).await.expect("first insert failed");
        upsert_time_row(&mut conn, &row).await.expect("conflicting insert failed");
        drop(conn);

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM time")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_stored_parts_round_trip() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let row = derive_time_row(1_541_121_934_796).unwrap();
        upsert_time_row(&mut conn, &row).await.unwrap();
        drop(conn);

        let (hour, day, week, month, year, weekday): (i64, i64, i64, i64, i64, i64) =
            sqlx::query_as(
                "SELECT hour, day, week, month, year, weekday FROM time WHERE start_time = ?",
            )
            .bind(1_541_121_934_796_i64)
            .fetch_one(&pool)
            .await
            .unwrap();

        assert_eq!((hour, day, week, month, year, weekday), (1, 2, 44, 11, 2018, 4));
    }
}
