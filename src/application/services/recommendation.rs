use std::sync::Arc;

use super::offline_service::OfflineService;
use super::repeat_protection::RepeatProtectionService;
use crate::domain::clustering;
use crate::domain::entities::{CheapAreaHint, Restaurant};
use crate::domain::value_objects::{GeoBounds, GeoPoint, RestaurantFilters};
use crate::shared::error::AppError;

/// The "flexibly cheap" test is owned by the broader app; the pipeline only
/// ever sees it as a boolean predicate.
pub type CheapPredicate = Arc<dyn Fn(&Restaurant) -> bool + Send + Sync>;

pub fn default_cheap_predicate() -> CheapPredicate {
    Arc::new(|restaurant: &Restaurant| {
        restaurant
            .average_price
            .map(|price| price <= 15.0)
            .unwrap_or(restaurant.price_tier <= 1)
    })
}

#[derive(Debug, Clone)]
pub struct RecommendationSet {
    pub restaurants: Vec<Restaurant>,
    pub cheap_areas: Vec<CheapAreaHint>,
}

/// Composes the pipeline: results (live or cached) run through repeat
/// protection, then area hints derive from what survived.
pub struct RecommendationService {
    offline: Arc<OfflineService>,
    repeat_protection: Arc<RepeatProtectionService>,
    cheap_predicate: CheapPredicate,
}

impl RecommendationService {
    pub fn new(
        offline: Arc<OfflineService>,
        repeat_protection: Arc<RepeatProtectionService>,
        cheap_predicate: CheapPredicate,
    ) -> Self {
        Self {
            offline,
            repeat_protection,
            cheap_predicate,
        }
    }

    /// Live-fetch path: write-through to the cache, then filter and derive
    /// hints from the full live set.
    pub async fn process_live_results(
        &self,
        restaurants: Vec<Restaurant>,
        user_location: Option<GeoPoint>,
        view_bounds: &GeoBounds,
    ) -> Result<RecommendationSet, AppError> {
        self.offline
            .cache_results(&restaurants, user_location)
            .await?;
        self.assemble(restaurants, view_bounds).await
    }

    /// Offline path: same filters over the cached fallback.
    pub async fn cached_recommendations(
        &self,
        user_location: Option<GeoPoint>,
        filters: &RestaurantFilters,
        view_bounds: &GeoBounds,
    ) -> Result<RecommendationSet, AppError> {
        let restaurants = self.offline.cached_results(user_location, filters).await?;
        self.assemble(restaurants, view_bounds).await
    }

    async fn assemble(
        &self,
        restaurants: Vec<Restaurant>,
        view_bounds: &GeoBounds,
    ) -> Result<RecommendationSet, AppError> {
        let visible = self
            .repeat_protection
            .filter_recently_shown(restaurants)
            .await?;
        let cheap_areas =
            clustering::cheap_areas(&visible, view_bounds, |r| (self.cheap_predicate)(r));

        Ok(RecommendationSet {
            restaurants: visible,
            cheap_areas,
        })
    }
}
