//! User dimension operations

use crate::models::UserRecord;
use playmart_common::Result;
use sqlx::SqliteConnection;

/// Insert or update a user dimension row.
///
/// Users are the one mutable dimension: a later event overwrites the stored
/// profile fields and subscription level (last write wins).
pub async fn upsert_user(conn: &mut SqliteConnection, user: &UserRecord) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO users (user_id, first_name, last_name, gender, level)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT(user_id) DO UPDATE SET
            first_name = excluded.first_name,
            last_name = excluded.last_name,
            gender = excluded.gender,
            level = excluded.level
        "#,
    )
    .bind(&user.user_id)
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.gender)
    .bind(&user.level)
    .execute(conn)
    .await?;

    Ok(())
}
