//! PostgreSQL schema bootstrap for the issue collection.

use sqlx::PgPool;

/// Create the issue table and its ordering index if missing.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS issues (
            id TEXT PRIMARY KEY,
            seq BIGSERIAL NOT NULL,
            title TEXT NOT NULL,
            summary TEXT NOT NULL DEFAULT '',
            company TEXT NOT NULL DEFAULT '',
            union_position TEXT NOT NULL DEFAULT '',
            display_order BIGINT NOT NULL DEFAULT 0,
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // `seq` breaks ties between equal display_order values in insertion order.
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_issues_order ON issues (display_order, seq)")
        .execute(pool)
        .await?;

    Ok(())
}
