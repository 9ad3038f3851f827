use std::collections::HashSet;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::application::ports::ViewHistoryStore;
use crate::domain::value_objects::ViewSource;
use crate::shared::error::AppError;

/// SQLite-backed append-only view log.
pub struct SqliteViewHistoryStore {
    pool: SqlitePool,
}

impl SqliteViewHistoryStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ViewHistoryStore for SqliteViewHistoryStore {
    async fn record_view(
        &self,
        restaurant_id: &str,
        source: ViewSource,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO view_history (id, restaurant_id, viewed_at, source)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(restaurant_id)
        .bind(Utc::now().timestamp())
        .bind(source.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn recently_viewed_ids(
        &self,
        source: ViewSource,
        since: i64,
    ) -> Result<HashSet<String>, AppError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT DISTINCT restaurant_id FROM view_history
            WHERE source = ?1 AND viewed_at >= ?2
            "#,
        )
        .bind(source.as_str())
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    async fn cleanup(&self, older_than: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM view_history WHERE viewed_at < ?1")
            .bind(older_than)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
