use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::ConnectivityProvider;
use crate::application::services::recommendation::{default_cheap_predicate, CheapPredicate};
use crate::application::services::{
    DealService, OfflineService, RecommendationService, RepeatProtectionService, ThumbnailPolicy,
};
use crate::infrastructure::cache::{SqliteRestaurantCache, ThumbnailStore};
use crate::infrastructure::database::ConnectionPool;
use crate::infrastructure::deals::SqliteDealStore;
use crate::infrastructure::history::SqliteViewHistoryStore;
use crate::infrastructure::network::HttpThumbnailFetcher;
use crate::shared::config::AppConfig;

/// Wires the whole core together for the app shell: pool and migrations,
/// stores, then the services the shell actually consumes.
#[derive(Clone)]
pub struct CoreState {
    pub config: AppConfig,
    pub pool: ConnectionPool,
    pub offline: Arc<OfflineService>,
    pub repeat_protection: Arc<RepeatProtectionService>,
    pub deals: Arc<DealService>,
    pub recommendations: Arc<RecommendationService>,
}

impl CoreState {
    pub async fn new(
        config: AppConfig,
        connectivity: Arc<dyn ConnectivityProvider>,
    ) -> anyhow::Result<Self> {
        Self::with_cheap_predicate(config, connectivity, default_cheap_predicate()).await
    }

    pub async fn with_cheap_predicate(
        config: AppConfig,
        connectivity: Arc<dyn ConnectivityProvider>,
        cheap_predicate: CheapPredicate,
    ) -> anyhow::Result<Self> {
        config.validate().map_err(anyhow::Error::msg)?;

        let pool =
            ConnectionPool::new(&config.database.url, config.database.max_connections).await?;
        pool.migrate().await?;

        let thumbnails = Arc::new(ThumbnailStore::new(config.thumbnails.dir.clone()));
        let fetcher = Arc::new(HttpThumbnailFetcher::new(Duration::from_secs(
            config.thumbnails.fetch_timeout_secs,
        ))?);

        let cache = Arc::new(SqliteRestaurantCache::new(
            pool.get_pool().clone(),
            thumbnails,
            fetcher,
            config.cache.clone(),
            config.thumbnails.size_px,
        ));

        let history = Arc::new(SqliteViewHistoryStore::new(pool.get_pool().clone()));
        let repeat_protection = Arc::new(RepeatProtectionService::new(history, &config.history));

        let deals = Arc::new(DealService::new(Arc::new(SqliteDealStore::new(
            pool.get_pool().clone(),
        ))));

        let offline = Arc::new(OfflineService::new(
            cache,
            connectivity,
            ThumbnailPolicy {
                wifi_only: config.thumbnails.wifi_only,
            },
        ));

        let recommendations = Arc::new(RecommendationService::new(
            Arc::clone(&offline),
            Arc::clone(&repeat_protection),
            cheap_predicate,
        ));

        Ok(Self {
            config,
            pool,
            offline,
            repeat_protection,
            deals,
            recommendations,
        })
    }

    /// Releases the connectivity subscription and closes the pool.
    pub async fn shutdown(&self) {
        self.offline.close();
        self.pool.close().await;
    }
}
