use crate::domain::entities::Deal;
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Port over the deal table.
#[async_trait]
pub trait DealStore: Send + Sync {
    async fn insert(&self, deal: &Deal) -> Result<(), AppError>;

    async fn deals_for_restaurant(&self, restaurant_id: &str) -> Result<Vec<Deal>, AppError>;

    async fn all_deals(&self) -> Result<Vec<Deal>, AppError>;

    /// Counter-only mutation; the row is otherwise immutable.
    async fn vote(&self, deal_id: &str, upvote: bool) -> Result<(), AppError>;

    async fn report(&self, deal_id: &str) -> Result<(), AppError>;

    /// Hard-delete deals whose absolute validity window has passed.
    /// Returns rows removed.
    async fn delete_expired(&self, now: i64) -> Result<u64, AppError>;
}
