//! Pipeline orchestrator
//!
//! Drives a full load run: discover source files, transform each one,
//! apply its rows, commit, report progress. Processing is strictly
//! sequential - one file is parsed, resolved, loaded and committed before
//! the next begins - and fail-fast: the first transformer or loader error
//! halts the run with no skip-and-continue.

use crate::config::EtlConfig;
use crate::db::{artists, songplays, songs, time, users};
use crate::services::FileScanner;
use crate::transform;
use playmart_common::Result;
use sqlx::SqlitePool;
use std::path::Path;
use tracing::{error, info};

/// File extension matched when enumerating source directories
const SOURCE_EXTENSION: &str = "json";

/// What a directory's files contain, deciding which transformer runs
#[derive(Debug, Clone, Copy)]
enum FileKind {
    Song,
    Log,
}

/// Counts reported after a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub song_files: usize,
    pub log_files: usize,
}

/// Run the full pipeline: song metadata first, then event logs.
///
/// Dimension data must be committed before the log phase resolves against
/// it, which the phase ordering guarantees for same-run song files.
pub async fn run(pool: &SqlitePool, config: &EtlConfig) -> Result<RunSummary> {
    let song_files = process_directory(pool, &config.song_data_dir, FileKind::Song).await?;
    let log_files = process_directory(pool, &config.log_data_dir, FileKind::Log).await?;

    Ok(RunSummary { song_files, log_files })
}

/// Process every matching file under one root directory, committing after
/// each file and emitting a progress line.
async fn process_directory(pool: &SqlitePool, dir: &Path, kind: FileKind) -> Result<usize> {
    let scanner = FileScanner::new(SOURCE_EXTENSION);
    let files = scanner.scan(dir);
    let total = files.len();

    info!("{} files found in {}", total, dir.display());

    for (index, path) in files.iter().enumerate() {
        let result = match kind {
            FileKind::Song => process_song_file(pool, path).await,
            FileKind::Log => process_log_file(pool, path).await,
        };

        if let Err(e) = result {
            error!(
                "Halting run at file {}/{} ({}): {}",
                index + 1,
                total,
                path.display(),
                e
            );
            return Err(e);
        }

        info!("{}/{} files processed", index + 1, total);
    }

    Ok(total)
}

/// Transform one song-metadata file and commit its two dimension rows
async fn process_song_file(pool: &SqlitePool, path: &Path) -> Result<()> {
    let (song, artist) = transform::song::transform_song_file(path)?;

    let mut tx = pool.begin().await?;
    songs::upsert_song(&mut tx, &song).await?;
    artists::upsert_artist(&mut tx, &artist).await?;
    tx.commit().await?;

    Ok(())
}

/// Transform one event-log file and commit its rows.
///
/// Resolution happens during the transform, against committed state only;
/// afterwards all writes for the file share one transaction, dimensions
/// first, then the staged fact batch.
async fn process_log_file(pool: &SqlitePool, path: &Path) -> Result<()> {
    let batch = transform::log::transform_log_file(pool, path).await?;

    let mut tx = pool.begin().await?;
    for row in &batch.time_rows {
        time::upsert_time_row(&mut tx, row).await?;
    }
    for user in &batch.users {
        users::upsert_user(&mut tx, user).await?;
    }
    songplays::insert_songplays(&mut tx, &batch.songplays).await?;
    tx.commit().await?;

    Ok(())
}
