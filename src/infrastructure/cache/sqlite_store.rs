use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, warn};

use super::mappers::restaurant_from_row;
use super::rows::CachedRestaurantRow;
use super::thumbnail_store::ThumbnailStore;
use crate::application::ports::{RestaurantCache, ThumbnailFetcher};
use crate::domain::entities::{CacheStats, Restaurant};
use crate::domain::value_objects::{GeoPoint, RestaurantFilters};
use crate::shared::config::CacheConfig;
use crate::shared::error::AppError;

/// SQLite-backed restaurant snapshot cache. Owns the rows and the thumbnail
/// files; nothing else writes or evicts either.
pub struct SqliteRestaurantCache {
    pool: SqlitePool,
    thumbnails: Arc<ThumbnailStore>,
    fetcher: Arc<dyn ThumbnailFetcher>,
    config: CacheConfig,
    thumbnail_size_px: u32,
}

impl SqliteRestaurantCache {
    pub fn new(
        pool: SqlitePool,
        thumbnails: Arc<ThumbnailStore>,
        fetcher: Arc<dyn ThumbnailFetcher>,
        config: CacheConfig,
        thumbnail_size_px: u32,
    ) -> Self {
        Self {
            pool,
            thumbnails,
            fetcher,
            config,
            thumbnail_size_px,
        }
    }

    async fn upsert(
        &self,
        restaurant: &Restaurant,
        user_location: Option<GeoPoint>,
        now: i64,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO cached_restaurants (
                id, name, cuisine, address, latitude, longitude,
                price_tier, rating, near_transit, student_discount,
                average_price, price_provenance, open_now,
                image_url, thumbnail_path,
                cached_at, last_accessed_at, cache_origin_lat, cache_origin_lng
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10,
                ?11, ?12, ?13, ?14, ?15, ?16, ?16, ?17, ?18
            )
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                cuisine = excluded.cuisine,
                address = excluded.address,
                latitude = excluded.latitude,
                longitude = excluded.longitude,
                price_tier = excluded.price_tier,
                rating = excluded.rating,
                near_transit = excluded.near_transit,
                student_discount = excluded.student_discount,
                average_price = excluded.average_price,
                price_provenance = excluded.price_provenance,
                open_now = excluded.open_now,
                image_url = excluded.image_url,
                thumbnail_path = excluded.thumbnail_path,
                cached_at = excluded.cached_at,
                last_accessed_at = excluded.last_accessed_at,
                cache_origin_lat = excluded.cache_origin_lat,
                cache_origin_lng = excluded.cache_origin_lng
            "#,
        )
        .bind(&restaurant.id)
        .bind(&restaurant.name)
        .bind(&restaurant.cuisine)
        .bind(&restaurant.address)
        .bind(restaurant.location.latitude)
        .bind(restaurant.location.longitude)
        .bind(restaurant.price_tier as i64)
        .bind(restaurant.rating)
        .bind(restaurant.near_transit)
        .bind(restaurant.student_discount)
        .bind(restaurant.average_price)
        .bind(restaurant.price_provenance.as_str())
        .bind(restaurant.open_now)
        .bind(&restaurant.image_url)
        .bind(&restaurant.thumbnail_path)
        .bind(now)
        .bind(user_location.map(|l| l.latitude))
        .bind(user_location.map(|l| l.longitude))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Evicts least-recently-accessed rows beyond the entry ceiling.
    async fn enforce_entry_ceiling(&self) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM cached_restaurants WHERE id IN (
                SELECT id FROM cached_restaurants
                ORDER BY last_accessed_at DESC, cached_at DESC
                LIMIT -1 OFFSET ?1
            )
            "#,
        )
        .bind(self.config.max_entries as i64)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes least-recently-accessed thumbnail files until the byte budget
    /// holds. Rows stay; only their local-file reference is dropped.
    async fn enforce_size_ceiling(&self) -> Result<(), AppError> {
        let budget = self.config.max_size_mb * 1024 * 1024;
        let mut total = self.thumbnails.total_bytes().await;
        if total <= budget {
            return Ok(());
        }

        let victims: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT id FROM cached_restaurants
            WHERE thumbnail_path IS NOT NULL
            ORDER BY last_accessed_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        for (id,) in victims {
            if total <= budget {
                break;
            }
            let freed = self.thumbnails.remove(&id).await;
            sqlx::query("UPDATE cached_restaurants SET thumbnail_path = NULL WHERE id = ?1")
                .bind(&id)
                .execute(&self.pool)
                .await?;
            total = total.saturating_sub(freed);
        }

        Ok(())
    }

    async fn cached_ids(&self) -> Result<HashSet<String>, AppError> {
        let rows: Vec<(String,)> = sqlx::query_as("SELECT id FROM cached_restaurants")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Best-effort thumbnail prefetch for every restaurant with a remote
    /// image. Spawned, never awaited by the write path; the only write it
    /// applies back is the single-field thumbnail path update.
    fn spawn_thumbnail_prefetch(&self, restaurants: &[Restaurant]) {
        let targets: Vec<(String, String)> = restaurants
            .iter()
            .filter_map(|r| r.image_url.clone().map(|url| (r.id.clone(), url)))
            .collect();
        if targets.is_empty() {
            return;
        }

        let fetcher = Arc::clone(&self.fetcher);
        let thumbnails = Arc::clone(&self.thumbnails);
        let pool = self.pool.clone();
        let size_px = self.thumbnail_size_px;

        tokio::spawn(async move {
            for (id, url) in targets {
                let bytes = match fetcher.fetch_thumbnail(&url, size_px).await {
                    Ok(bytes) => bytes,
                    Err(err) => {
                        warn!("Thumbnail fetch failed for {}: {}", id, err);
                        continue;
                    }
                };
                let path = match thumbnails.write(&id, &bytes).await {
                    Ok(path) => path,
                    Err(err) => {
                        warn!("Thumbnail write failed for {}: {}", id, err);
                        continue;
                    }
                };
                let update = sqlx::query(
                    "UPDATE cached_restaurants SET thumbnail_path = ?1 WHERE id = ?2",
                )
                .bind(path.to_string_lossy().into_owned())
                .bind(&id)
                .execute(&pool)
                .await;
                if let Err(err) = update {
                    warn!("Thumbnail path update failed for {}: {}", id, err);
                }
            }
        });
    }
}

#[async_trait]
impl RestaurantCache for SqliteRestaurantCache {
    async fn cache_results(
        &self,
        restaurants: &[Restaurant],
        user_location: Option<GeoPoint>,
        allow_thumbnails: bool,
    ) -> Result<(), AppError> {
        let now = Utc::now().timestamp();
        for restaurant in restaurants {
            self.upsert(restaurant, user_location, now).await?;
        }

        let evicted = self.enforce_entry_ceiling().await?;
        if evicted > 0 {
            debug!("Evicted {} rows past the entry ceiling", evicted);
        }

        if allow_thumbnails {
            self.spawn_thumbnail_prefetch(restaurants);
        }

        Ok(())
    }

    async fn cached_restaurants(
        &self,
        user_location: Option<GeoPoint>,
        filters: &RestaurantFilters,
    ) -> Result<Vec<Restaurant>, AppError> {
        let rows: Vec<CachedRestaurantRow> = match user_location {
            Some(location) => {
                let bounds = location.bounding_box(self.config.nearby_radius_meters);
                sqlx::query_as(
                    r#"
                    SELECT * FROM cached_restaurants
                    WHERE latitude BETWEEN ?1 AND ?2
                      AND longitude BETWEEN ?3 AND ?4
                    ORDER BY last_accessed_at DESC
                    "#,
                )
                .bind(bounds.south_west.latitude)
                .bind(bounds.north_east.latitude)
                .bind(bounds.south_west.longitude)
                .bind(bounds.north_east.longitude)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as(
                    "SELECT * FROM cached_restaurants ORDER BY last_accessed_at DESC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows
            .into_iter()
            .map(restaurant_from_row)
            .filter(|restaurant| filters.matches(restaurant))
            .collect())
    }

    async fn record_access(&self, restaurant_id: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE cached_restaurants SET last_accessed_at = ?1 WHERE id = ?2")
            .bind(Utc::now().timestamp())
            .bind(restaurant_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn cleanup_old_data(&self) -> Result<u64, AppError> {
        let cutoff = Utc::now().timestamp() - self.config.max_age_days * 86_400;
        let result = sqlx::query("DELETE FROM cached_restaurants WHERE cached_at < ?1")
            .bind(cutoff)
            .execute(&self.pool)
            .await?;
        let mut removed = result.rows_affected();

        removed += self.enforce_entry_ceiling().await?;
        self.enforce_size_ceiling().await?;

        // Snapshot once, then sweep; ids deleted above are orphans now.
        let live_ids = self.cached_ids().await?;
        let swept = self.thumbnails.sweep_orphans(&live_ids).await;
        if swept > 0 {
            debug!("Swept {} orphaned thumbnails", swept);
        }

        Ok(removed)
    }

    async fn clear(&self) -> Result<(), AppError> {
        sqlx::query("DELETE FROM cached_restaurants")
            .execute(&self.pool)
            .await?;
        self.thumbnails.clear().await;
        Ok(())
    }

    async fn stats(&self) -> Result<CacheStats, AppError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cached_restaurants")
            .fetch_one(&self.pool)
            .await?;
        let bytes = self.thumbnails.total_bytes().await;
        Ok(CacheStats::new(count, bytes))
    }
}
