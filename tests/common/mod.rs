use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tempfile::TempDir;

use yasumeshi_core::application::ports::ThumbnailFetcher;
use yasumeshi_core::domain::entities::Restaurant;
use yasumeshi_core::domain::value_objects::{Freshness, GeoPoint, PriceProvenance};
use yasumeshi_core::infrastructure::cache::{SqliteRestaurantCache, ThumbnailStore};
use yasumeshi_core::infrastructure::database::ConnectionPool;
use yasumeshi_core::shared::config::CacheConfig;
use yasumeshi_core::shared::error::AppError;

pub async fn test_pool() -> ConnectionPool {
    let pool = ConnectionPool::from_memory().await.expect("in-memory pool");
    pool.migrate().await.expect("migrations");
    pool
}

pub fn test_cache_config() -> CacheConfig {
    CacheConfig {
        max_age_days: 7,
        max_entries: 200,
        max_size_mb: 50,
        nearby_radius_meters: 5_000.0,
    }
}

/// Deterministic stand-in for the image-fetch collaborator. URLs containing
/// "fail" error out; everything else yields a fixed payload.
#[derive(Default)]
pub struct FakeThumbnailFetcher {
    pub calls: AtomicU32,
}

#[async_trait]
impl ThumbnailFetcher for FakeThumbnailFetcher {
    async fn fetch_thumbnail(&self, url: &str, _size_px: u32) -> Result<Vec<u8>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if url.contains("fail") {
            return Err(AppError::Network(format!("unreachable: {url}")));
        }
        Ok(vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10])
    }
}

pub struct CacheFixture {
    pub pool: ConnectionPool,
    pub cache: Arc<SqliteRestaurantCache>,
    pub fetcher: Arc<FakeThumbnailFetcher>,
    pub thumbnails: Arc<ThumbnailStore>,
    pub _thumb_dir: TempDir,
}

pub async fn cache_fixture() -> CacheFixture {
    cache_fixture_with_config(test_cache_config()).await
}

pub async fn cache_fixture_with_config(config: CacheConfig) -> CacheFixture {
    let pool = test_pool().await;
    let thumb_dir = TempDir::new().expect("thumbnail dir");
    let thumbnails = Arc::new(ThumbnailStore::new(thumb_dir.path().to_path_buf()));
    let fetcher = Arc::new(FakeThumbnailFetcher::default());
    let cache = Arc::new(SqliteRestaurantCache::new(
        pool.get_pool().clone(),
        Arc::clone(&thumbnails),
        fetcher.clone(),
        config,
        200,
    ));

    CacheFixture {
        pool,
        cache,
        fetcher,
        thumbnails,
        _thumb_dir: thumb_dir,
    }
}

pub fn live_restaurant(id: &str, lat: f64, lng: f64) -> Restaurant {
    let mut restaurant = Restaurant::new(
        id.to_string(),
        format!("Restaurant {id}"),
        GeoPoint::new(lat, lng),
    );
    restaurant.cuisine = "ramen".to_string();
    restaurant.address = "100 Queen St W".to_string();
    restaurant.price_tier = 1;
    restaurant.rating = 4.1;
    restaurant.average_price = Some(10.0);
    restaurant.price_provenance = PriceProvenance::Verified;
    restaurant.freshness = Freshness::Live;
    restaurant.distance_meters = Some(420.0);
    restaurant
}
