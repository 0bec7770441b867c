//! PostgreSQL issue store using sqlx.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use unionboard_core::{
    Issue, IssueInput, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS,
    PG_POOL_MAX_CONNECTIONS,
};

use crate::error::StorageError;
use crate::pg_migrations::run_pg_migrations;
use crate::traits::IssueStore;

const ISSUE_COLUMNS: &str =
    "id, title, summary, company, union_position, display_order, updated_at";

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }
}

fn row_to_issue(row: &PgRow) -> Result<Issue, StorageError> {
    let updated_at: DateTime<Utc> = row.try_get("updated_at")?;
    Ok(Issue {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        summary: row.try_get("summary")?,
        company: row.try_get("company")?,
        union_position: row.try_get("union_position")?,
        order: row.try_get("display_order")?,
        updated_at,
    })
}

#[async_trait]
impl IssueStore for PgStorage {
    async fn list_issues(&self) -> Result<Vec<Issue>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {ISSUE_COLUMNS} FROM issues ORDER BY display_order ASC, seq ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_issue).collect()
    }

    async fn create_issue(&self, input: IssueInput) -> Result<Issue, StorageError> {
        let id = uuid::Uuid::new_v4().to_string();
        let row = sqlx::query(&format!(
            "INSERT INTO issues (id, title, summary, company, union_position, display_order, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {ISSUE_COLUMNS}"
        ))
        .bind(&id)
        .bind(&input.title)
        .bind(&input.summary)
        .bind(&input.company)
        .bind(&input.union_position)
        .bind(input.order)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        row_to_issue(&row)
    }

    async fn update_issue(&self, id: &str, input: IssueInput) -> Result<Issue, StorageError> {
        let row = sqlx::query(&format!(
            "UPDATE issues
             SET title = $2, summary = $3, company = $4, union_position = $5,
                 display_order = $6, updated_at = $7
             WHERE id = $1
             RETURNING {ISSUE_COLUMNS}"
        ))
        .bind(id)
        .bind(&input.title)
        .bind(&input.summary)
        .bind(&input.company)
        .bind(&input.union_position)
        .bind(input.order)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(row) => row_to_issue(&row),
            None => Err(StorageError::issue_not_found(id)),
        }
    }

    async fn delete_issue(&self, id: &str) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM issues WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StorageError::issue_not_found(id));
        }
        Ok(())
    }
}
