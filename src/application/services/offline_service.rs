use std::sync::{Arc, Mutex};

use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::application::ports::{ConnectivityEvent, ConnectivityProvider, RestaurantCache};
use crate::domain::entities::{CacheStats, Restaurant};
use crate::domain::value_objects::{GeoPoint, RestaurantFilters};
use crate::shared::error::AppError;

/// User-facing thumbnail policy injected by the shell; not internal state of
/// the cache store.
#[derive(Debug, Clone, Copy)]
pub struct ThumbnailPolicy {
    pub wifi_only: bool,
}

impl Default for ThumbnailPolicy {
    fn default() -> Self {
        Self { wifi_only: true }
    }
}

/// Top-level offline policy: observes connectivity, decides when cached
/// results stand in for live ones, drives periodic cleanup and exposes
/// cache statistics. Never mutates rows directly, only through the store.
pub struct OfflineService {
    cache: Arc<dyn RestaurantCache>,
    connectivity: Arc<dyn ConnectivityProvider>,
    offline_tx: watch::Sender<bool>,
    stats_tx: watch::Sender<CacheStats>,
    listener: Mutex<Option<JoinHandle<()>>>,
    thumbnail_policy: ThumbnailPolicy,
}

impl OfflineService {
    pub fn new(
        cache: Arc<dyn RestaurantCache>,
        connectivity: Arc<dyn ConnectivityProvider>,
        thumbnail_policy: ThumbnailPolicy,
    ) -> Self {
        let (offline_tx, _) = watch::channel(!connectivity.has_internet());
        let (stats_tx, _) = watch::channel(CacheStats::default());

        let listener = Self::spawn_listener(Arc::clone(&connectivity), offline_tx.clone());

        Self {
            cache,
            connectivity,
            offline_tx,
            stats_tx,
            listener: Mutex::new(Some(listener)),
            thumbnail_policy,
        }
    }

    /// Funnels connectivity notifications, which arrive on no guaranteed
    /// task, into the single offline flag. A lost transport re-derives the
    /// flag instead of flipping it: losing cellular while Wi-Fi is still up
    /// must not report offline.
    fn spawn_listener(
        connectivity: Arc<dyn ConnectivityProvider>,
        offline_tx: watch::Sender<bool>,
    ) -> JoinHandle<()> {
        let mut events = connectivity.subscribe();
        tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(ConnectivityEvent::Available) => {
                        let _ = offline_tx.send(false);
                    }
                    Ok(ConnectivityEvent::Lost) => {
                        let offline = !connectivity.has_internet();
                        let _ = offline_tx.send(offline);
                        if offline {
                            info!("Network lost, serving cached results");
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        debug!("Connectivity listener lagged by {} events", skipped);
                        let _ = offline_tx.send(!connectivity.has_internet());
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }

    pub fn offline(&self) -> watch::Receiver<bool> {
        self.offline_tx.subscribe()
    }

    pub fn is_offline(&self) -> bool {
        *self.offline_tx.borrow()
    }

    pub fn stats(&self) -> watch::Receiver<CacheStats> {
        self.stats_tx.subscribe()
    }

    /// Write-through after a live fetch. The thumbnail gate combines the
    /// injected policy with the current transport class.
    pub async fn cache_results(
        &self,
        restaurants: &[Restaurant],
        user_location: Option<GeoPoint>,
    ) -> Result<(), AppError> {
        let allow_thumbnails =
            !self.thumbnail_policy.wifi_only || self.connectivity.is_unmetered();
        self.cache
            .cache_results(restaurants, user_location, allow_thumbnails)
            .await?;
        self.refresh_stats().await
    }

    /// Cached fallback read; local storage only, never network.
    pub async fn cached_results(
        &self,
        user_location: Option<GeoPoint>,
        filters: &RestaurantFilters,
    ) -> Result<Vec<Restaurant>, AppError> {
        self.cache.cached_restaurants(user_location, filters).await
    }

    pub async fn record_access(&self, restaurant_id: &str) -> Result<(), AppError> {
        self.cache.record_access(restaurant_id).await?;
        self.refresh_stats().await
    }

    pub async fn cleanup_old_data(&self) -> Result<u64, AppError> {
        let removed = self.cache.cleanup_old_data().await?;
        self.refresh_stats().await?;
        Ok(removed)
    }

    pub async fn clear_cache(&self) -> Result<(), AppError> {
        self.cache.clear().await?;
        self.refresh_stats().await
    }

    pub async fn refresh_stats(&self) -> Result<(), AppError> {
        let stats = self.cache.stats().await?;
        let _ = self.stats_tx.send(stats);
        Ok(())
    }

    /// Releases the connectivity subscription. Safe to call more than once;
    /// only the first call finds a listener to stop.
    pub fn close(&self) {
        let handle = self.listener.lock().ok().and_then(|mut guard| guard.take());
        if let Some(handle) = handle {
            handle.abort();
        }
    }
}

impl Drop for OfflineService {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::network::ChannelConnectivity;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
    use tokio::time::{timeout, Duration};

    #[derive(Default)]
    struct StubCache {
        allow_thumbnails_seen: AtomicBool,
        stats_calls: AtomicU32,
    }

    #[async_trait]
    impl RestaurantCache for StubCache {
        async fn cache_results(
            &self,
            _restaurants: &[Restaurant],
            _user_location: Option<GeoPoint>,
            allow_thumbnails: bool,
        ) -> Result<(), AppError> {
            self.allow_thumbnails_seen
                .store(allow_thumbnails, Ordering::SeqCst);
            Ok(())
        }

        async fn cached_restaurants(
            &self,
            _user_location: Option<GeoPoint>,
            _filters: &RestaurantFilters,
        ) -> Result<Vec<Restaurant>, AppError> {
            Ok(Vec::new())
        }

        async fn record_access(&self, _restaurant_id: &str) -> Result<(), AppError> {
            Ok(())
        }

        async fn cleanup_old_data(&self) -> Result<u64, AppError> {
            Ok(0)
        }

        async fn clear(&self) -> Result<(), AppError> {
            Ok(())
        }

        async fn stats(&self) -> Result<CacheStats, AppError> {
            self.stats_calls.fetch_add(1, Ordering::SeqCst);
            Ok(CacheStats::new(3, 1024))
        }
    }

    async fn wait_for_offline(rx: &mut watch::Receiver<bool>, expected: bool) {
        timeout(Duration::from_secs(1), async {
            loop {
                if *rx.borrow() == expected {
                    return;
                }
                rx.changed().await.unwrap();
            }
        })
        .await
        .expect("offline flag never reached expected value");
    }

    #[tokio::test]
    async fn lost_signal_rederives_the_offline_flag() {
        let connectivity = Arc::new(ChannelConnectivity::new(true, true));
        let service = OfflineService::new(
            Arc::new(StubCache::default()),
            connectivity.clone(),
            ThumbnailPolicy::default(),
        );
        let mut offline = service.offline();
        assert!(!*offline.borrow());

        connectivity.set_online(false);
        wait_for_offline(&mut offline, true).await;
        assert!(service.is_offline());

        connectivity.set_online(true);
        wait_for_offline(&mut offline, false).await;

        service.close();
    }

    #[tokio::test]
    async fn wifi_only_policy_gates_thumbnails() {
        let connectivity = Arc::new(ChannelConnectivity::new(true, false));
        let cache = Arc::new(StubCache::default());
        let service = OfflineService::new(
            cache.clone(),
            connectivity.clone(),
            ThumbnailPolicy { wifi_only: true },
        );

        service.cache_results(&[], None).await.unwrap();
        assert!(!cache.allow_thumbnails_seen.load(Ordering::SeqCst));

        connectivity.set_unmetered(true);
        service.cache_results(&[], None).await.unwrap();
        assert!(cache.allow_thumbnails_seen.load(Ordering::SeqCst));

        service.close();
    }

    #[tokio::test]
    async fn mutating_calls_refresh_stats() {
        let connectivity = Arc::new(ChannelConnectivity::new(true, true));
        let cache = Arc::new(StubCache::default());
        let service =
            OfflineService::new(cache.clone(), connectivity, ThumbnailPolicy::default());
        let stats = service.stats();

        service.cache_results(&[], None).await.unwrap();
        assert_eq!(stats.borrow().restaurant_count, 3);
        assert!(cache.stats_calls.load(Ordering::SeqCst) >= 1);

        service.cleanup_old_data().await.unwrap();
        service.clear_cache().await.unwrap();
        assert!(cache.stats_calls.load(Ordering::SeqCst) >= 3);

        service.close();
    }

    #[tokio::test]
    async fn close_is_idempotent() {
        let connectivity = Arc::new(ChannelConnectivity::new(true, true));
        let service = OfflineService::new(
            Arc::new(StubCache::default()),
            connectivity,
            ThumbnailPolicy::default(),
        );
        service.close();
        service.close();
    }
}
