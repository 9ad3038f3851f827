use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::application::ports::DealStore;
use crate::domain::entities::Deal;
use crate::domain::value_objects::{DealKind, DealOrigin};
use crate::shared::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
struct DealRow {
    id: String,
    restaurant_id: String,
    restaurant_name: String,
    title: String,
    description: String,
    original_price: Option<f64>,
    deal_price: f64,
    deal_kind: String,
    origin: String,
    valid_days: i64,
    start_time: Option<String>,
    end_time: Option<String>,
    valid_from: Option<i64>,
    valid_until: Option<i64>,
    upvotes: i64,
    downvotes: i64,
    report_count: i64,
    created_at: i64,
}

fn deal_from_row(row: DealRow) -> Deal {
    Deal {
        id: row.id,
        restaurant_id: row.restaurant_id,
        restaurant_name: row.restaurant_name,
        title: row.title,
        description: row.description,
        original_price: row.original_price,
        deal_price: row.deal_price,
        kind: DealKind::parse(&row.deal_kind),
        origin: DealOrigin::parse(&row.origin),
        valid_days: (row.valid_days & 0x7F) as u8,
        start_time: row.start_time,
        end_time: row.end_time,
        valid_from: row.valid_from,
        valid_until: row.valid_until,
        upvotes: row.upvotes,
        downvotes: row.downvotes,
        report_count: row.report_count,
        created_at: row.created_at,
    }
}

/// SQLite-backed deal table.
pub struct SqliteDealStore {
    pool: SqlitePool,
}

impl SqliteDealStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DealStore for SqliteDealStore {
    async fn insert(&self, deal: &Deal) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO deals (
                id, restaurant_id, restaurant_name, title, description,
                original_price, deal_price, deal_kind, origin,
                valid_days, start_time, end_time, valid_from, valid_until,
                upvotes, downvotes, report_count, created_at
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9,
                ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18
            )
            "#,
        )
        .bind(&deal.id)
        .bind(&deal.restaurant_id)
        .bind(&deal.restaurant_name)
        .bind(&deal.title)
        .bind(&deal.description)
        .bind(deal.original_price)
        .bind(deal.deal_price)
        .bind(deal.kind.as_str())
        .bind(deal.origin.as_str())
        .bind(deal.valid_days as i64)
        .bind(&deal.start_time)
        .bind(&deal.end_time)
        .bind(deal.valid_from)
        .bind(deal.valid_until)
        .bind(deal.upvotes)
        .bind(deal.downvotes)
        .bind(deal.report_count)
        .bind(deal.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn deals_for_restaurant(&self, restaurant_id: &str) -> Result<Vec<Deal>, AppError> {
        let rows: Vec<DealRow> = sqlx::query_as(
            r#"
            SELECT * FROM deals
            WHERE restaurant_id = ?1
            ORDER BY deal_price ASC
            "#,
        )
        .bind(restaurant_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(deal_from_row).collect())
    }

    async fn all_deals(&self) -> Result<Vec<Deal>, AppError> {
        let rows: Vec<DealRow> =
            sqlx::query_as("SELECT * FROM deals ORDER BY deal_price ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(deal_from_row).collect())
    }

    async fn vote(&self, deal_id: &str, upvote: bool) -> Result<(), AppError> {
        let sql = if upvote {
            "UPDATE deals SET upvotes = upvotes + 1 WHERE id = ?1"
        } else {
            "UPDATE deals SET downvotes = downvotes + 1 WHERE id = ?1"
        };
        let result = sqlx::query(sql).bind(deal_id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Deal {deal_id}")));
        }
        Ok(())
    }

    async fn report(&self, deal_id: &str) -> Result<(), AppError> {
        let result =
            sqlx::query("UPDATE deals SET report_count = report_count + 1 WHERE id = ?1")
                .bind(deal_id)
                .execute(&self.pool)
                .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Deal {deal_id}")));
        }
        Ok(())
    }

    async fn delete_expired(&self, now: i64) -> Result<u64, AppError> {
        let result =
            sqlx::query("DELETE FROM deals WHERE valid_until IS NOT NULL AND valid_until < ?1")
                .bind(now)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected())
    }
}
