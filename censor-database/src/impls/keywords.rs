use anyhow::Context as _;

use crate::database::{Database, MIGRATOR};

/// Create the `keywords` table if it does not exist yet. Safe to call on every startup.
pub async fn ensure_schema(db: &Database) -> anyhow::Result<()> {
    MIGRATOR
        .run(db.pool())
        .await
        .context("failed to apply keyword migrations")?;
    Ok(())
}

/// Get just the word strings (used to rebuild the in-memory cache).
///
/// No ordering is requested; rows come back in whatever order PostgreSQL returns them.
pub async fn list_keywords(db: &Database) -> anyhow::Result<Vec<String>> {
    let words: Vec<String> = sqlx::query_scalar("SELECT word FROM keywords")
        .fetch_all(db.pool())
        .await?;

    Ok(words)
}

/// Insert a keyword verbatim. Returns `true` if inserted, `false` if a row with
/// byte-identical text already existed.
pub async fn add_keyword(db: &Database, word: &str) -> anyhow::Result<bool> {
    let result = sqlx::query(
        "INSERT INTO keywords (word)
         VALUES ($1)
         ON CONFLICT (word) DO NOTHING",
    )
    .bind(word)
    .execute(db.pool())
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete every row matching `word` case-insensitively. Returns the number of
/// deleted rows; zero is not an error.
pub async fn remove_keyword(db: &Database, word: &str) -> anyhow::Result<u64> {
    let result = sqlx::query("DELETE FROM keywords WHERE LOWER(word) = LOWER($1)")
        .bind(word)
        .execute(db.pool())
        .await?;

    Ok(result.rows_affected())
}
