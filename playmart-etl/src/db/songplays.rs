//! Songplay fact operations

use crate::models::SongplayFact;
use playmart_common::Result;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

/// SQLite caps bind variables per statement; at 9 columns per row, chunks
/// of 100 rows stay comfortably under the cap.
const BATCH_CHUNK_ROWS: usize = 100;

/// Append all fact rows for one source file as a staged batch.
///
/// Facts are append-only and never conflict-checked. The whole batch runs
/// on the caller's transaction: it becomes visible at the file's commit or
/// not at all.
pub async fn insert_songplays(conn: &mut SqliteConnection, facts: &[SongplayFact]) -> Result<()> {
    for chunk in facts.chunks(BATCH_CHUNK_ROWS) {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "INSERT INTO songplays \
             (songplay_id, start_time, user_id, level, song_id, artist_id, \
              session_id, location, user_agent) ",
        );
        builder.push_values(chunk, |mut b, fact| {
            b.push_bind(fact.songplay_id.to_string())
                .push_bind(fact.start_time)
                .push_bind(&fact.user_id)
                .push_bind(&fact.level)
                .push_bind(&fact.song_id)
                .push_bind(&fact.artist_id)
                .push_bind(fact.session_id)
                .push_bind(&fact.location)
                .push_bind(&fact.user_agent);
        });
        builder.build().execute(&mut *conn).await?;
    }

    Ok(())
}
