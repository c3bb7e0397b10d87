//! Database initialization
//!
//! Opens (or creates on first run) the warehouse database and creates the
//! five star-schema tables if they don't exist. Versioned migrations are
//! out of scope: the table set is a fixed contract.

use crate::{Error, Result};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;

/// Initialize database connection and create tables if needed
///
/// A connection failure here is a startup connectivity error, reported as
/// fatal with no retry.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Use sqlite options to create database if it doesn't exist
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await
        .map_err(|e| Error::Connectivity(format!("{}: {}", db_path.display(), e)))?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;

    // Set busy timeout; the loader is the only writer, but readers may poke
    // at the database while a run is in flight
    sqlx::query("PRAGMA busy_timeout = 5000").execute(&pool).await?;

    create_tables(&pool).await?;

    Ok(pool)
}

/// Create the star-schema tables (idempotent - safe to call multiple times)
pub async fn create_tables(pool: &SqlitePool) -> Result<()> {
    create_songs_table(pool).await?;
    create_artists_table(pool).await?;
    create_time_table(pool).await?;
    create_users_table(pool).await?;
    create_songplays_table(pool).await?;

    info!("Warehouse tables initialized (songs, artists, time, users, songplays)");

    Ok(())
}

async fn create_songs_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS songs (
            song_id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            artist_id TEXT NOT NULL,
            year INTEGER NOT NULL DEFAULT 0,
            duration REAL NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn create_artists_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS artists (
            artist_id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            location TEXT,
            latitude REAL,
            longitude REAL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn create_time_table(pool: &SqlitePool) -> Result<()> {
    // start_time is the event timestamp in epoch milliseconds
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS time (
            start_time INTEGER PRIMARY KEY,
            hour INTEGER NOT NULL,
            day INTEGER NOT NULL,
            week INTEGER NOT NULL,
            month INTEGER NOT NULL,
            year INTEGER NOT NULL,
            weekday INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn create_users_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            user_id TEXT PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            gender TEXT NOT NULL,
            level TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn create_songplays_table(pool: &SqlitePool) -> Result<()> {
    // song_id/artist_id stay NULL when natural-key resolution finds no match
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS songplays (
            songplay_id TEXT PRIMARY KEY,
            start_time INTEGER NOT NULL,
            user_id TEXT NOT NULL,
            level TEXT NOT NULL,
            song_id TEXT,
            artist_id TEXT,
            session_id INTEGER NOT NULL,
            location TEXT,
            user_agent TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_database_creates_file_and_tables() {
        let tmp = tempfile::tempdir().unwrap();
        let db_path = tmp.path().join("playmart.db");

        let pool = init_database(&db_path).await.expect("Failed to init database");
        assert!(db_path.exists());

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        for expected in ["artists", "songplays", "songs", "time", "users"] {
            assert!(tables.iter().any(|t| t == expected), "missing table {expected}");
        }
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        create_tables(&pool).await.expect("first create failed");
        create_tables(&pool).await.expect("second create failed");
    }

    #[tokio::test]
    async fn test_init_database_creates_parent_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let db_path = tmp.path().join("deep").join("nested").join("playmart.db");

        init_database(&db_path).await.expect("Failed to init database");
        assert!(db_path.exists());
    }
}
