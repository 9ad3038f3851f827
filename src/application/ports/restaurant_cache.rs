use crate::domain::entities::{CacheStats, Restaurant};
use crate::domain::value_objects::{GeoPoint, RestaurantFilters};
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Port over the durable restaurant snapshot cache. The implementation is
/// the only writer and evictor of cached rows.
#[async_trait]
pub trait RestaurantCache: Send + Sync {
    /// Write-through a batch of live results, stamping freshness metadata
    /// and the user's position at write time. When `allow_thumbnails` is
    /// set, remote images are fetched and persisted in the background;
    /// thumbnail failures never fail the write.
    async fn cache_results(
        &self,
        restaurants: &[Restaurant],
        user_location: Option<GeoPoint>,
        allow_thumbnails: bool,
    ) -> Result<(), AppError>;

    /// Read back cached rows, geo-scoped around `user_location` when given,
    /// most-recently-accessed first otherwise. Rows come back with
    /// freshness forced to cached and distance reset, then `filters` apply.
    async fn cached_restaurants(
        &self,
        user_location: Option<GeoPoint>,
        filters: &RestaurantFilters,
    ) -> Result<Vec<Restaurant>, AppError>;

    /// Bump a row's last-access instant for future recency-ordered reads.
    async fn record_access(&self, restaurant_id: &str) -> Result<(), AppError>;

    /// Age out old rows, enforce the retention ceilings and sweep orphaned
    /// thumbnail files. Returns the number of rows removed.
    async fn cleanup_old_data(&self) -> Result<u64, AppError>;

    /// Drop every row and every thumbnail file.
    async fn clear(&self) -> Result<(), AppError>;

    /// Recomputed row count and thumbnail byte footprint.
    async fn stats(&self) -> Result<CacheStats, AppError>;
}
