use crate::domain::value_objects::ViewSource;
use crate::shared::error::AppError;
use async_trait::async_trait;
use std::collections::HashSet;

/// Port over the append-only view-history log.
#[async_trait]
pub trait ViewHistoryStore: Send + Sync {
    /// Append an entry. Duplicate views are kept; recency windowing only
    /// needs the latest entries.
    async fn record_view(&self, restaurant_id: &str, source: ViewSource)
        -> Result<(), AppError>;

    /// Distinct restaurant ids recorded with `source` at or after `since`.
    async fn recently_viewed_ids(
        &self,
        source: ViewSource,
        since: i64,
    ) -> Result<HashSet<String>, AppError>;

    /// Delete entries older than `older_than`. Returns rows removed.
    async fn cleanup(&self, older_than: i64) -> Result<u64, AppError>;
}
