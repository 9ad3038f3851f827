use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::ViewHistoryStore;
use crate::domain::entities::Restaurant;
use crate::domain::value_objects::ViewSource;
use crate::shared::config::HistoryConfig;
use crate::shared::error::AppError;

/// Suppresses restaurants shown recently in recommendation contexts so
/// results stay varied. Search-sourced views are never recorded under a
/// suppressible source, so reaching a place by explicit search never hides
/// it later.
pub struct RepeatProtectionService {
    history: Arc<dyn ViewHistoryStore>,
    cooldown_hours: i64,
    retention_days: i64,
}

impl RepeatProtectionService {
    pub fn new(history: Arc<dyn ViewHistoryStore>, config: &HistoryConfig) -> Self {
        Self {
            history,
            cooldown_hours: config.cooldown_hours,
            retention_days: config.retention_days,
        }
    }

    /// Drops restaurants recommended inside the cooldown window, preserving
    /// input order.
    pub async fn filter_recently_shown(
        &self,
        restaurants: Vec<Restaurant>,
    ) -> Result<Vec<Restaurant>, AppError> {
        let since = Utc::now().timestamp() - self.cooldown_hours * 3_600;
        let seen = self
            .history
            .recently_viewed_ids(ViewSource::Recommendation, since)
            .await?;

        Ok(restaurants
            .into_iter()
            .filter(|restaurant| !seen.contains(&restaurant.id))
            .collect())
    }

    /// Appends a view. Duplicates are kept on purpose; the cooldown only
    /// cares whether any entry falls inside the window.
    pub async fn record_view(
        &self,
        restaurant_id: &str,
        source: ViewSource,
    ) -> Result<(), AppError> {
        self.history.record_view(restaurant_id, source).await
    }

    /// Ages out old entries. Meant to run periodically, not on every read.
    pub async fn cleanup(&self) -> Result<u64, AppError> {
        let older_than = Utc::now().timestamp() - self.retention_days * 86_400;
        self.history.cleanup(older_than).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::GeoPoint;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;

    struct StubHistory {
        recommended: Mutex<HashSet<String>>,
        recorded: Mutex<Vec<(String, ViewSource)>>,
    }

    impl StubHistory {
        fn with_recommended(ids: &[&str]) -> Self {
            Self {
                recommended: Mutex::new(ids.iter().map(|id| id.to_string()).collect()),
                recorded: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ViewHistoryStore for StubHistory {
        async fn record_view(
            &self,
            restaurant_id: &str,
            source: ViewSource,
        ) -> Result<(), AppError> {
            self.recorded
                .lock()
                .unwrap()
                .push((restaurant_id.to_string(), source));
            Ok(())
        }

        async fn recently_viewed_ids(
            &self,
            source: ViewSource,
            _since: i64,
        ) -> Result<HashSet<String>, AppError> {
            // Only recommendation views are ever suppressible.
            assert_eq!(source, ViewSource::Recommendation);
            Ok(self.recommended.lock().unwrap().clone())
        }

        async fn cleanup(&self, _older_than: i64) -> Result<u64, AppError> {
            Ok(0)
        }
    }

    fn restaurant(id: &str) -> Restaurant {
        Restaurant::new(id.to_string(), id.to_string(), GeoPoint::new(43.65, -79.38))
    }

    fn service(history: StubHistory) -> RepeatProtectionService {
        RepeatProtectionService::new(Arc::new(history), &HistoryConfig {
            cooldown_hours: 24,
            retention_days: 7,
        })
    }

    #[tokio::test]
    async fn recently_recommended_are_excluded_in_order() {
        let service = service(StubHistory::with_recommended(&["a", "c"]));
        let input = vec![restaurant("a"), restaurant("b"), restaurant("c"), restaurant("d")];

        let filtered = service.filter_recently_shown(input).await.unwrap();

        let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d"]);
    }

    #[tokio::test]
    async fn unseen_restaurants_pass_through() {
        let service = service(StubHistory::with_recommended(&[]));
        let filtered = service
            .filter_recently_shown(vec![restaurant("x")])
            .await
            .unwrap();
        assert_eq!(filtered.len(), 1);
    }

    #[tokio::test]
    async fn record_view_keeps_the_source() {
        let history = Arc::new(StubHistory::with_recommended(&[]));
        let service = RepeatProtectionService::new(
            history.clone(),
            &HistoryConfig {
                cooldown_hours: 24,
                retention_days: 7,
            },
        );

        service
            .record_view("a", ViewSource::Recommendation)
            .await
            .unwrap();
        service.record_view("a", ViewSource::Search).await.unwrap();

        let recorded = history.recorded.lock().unwrap();
        assert_eq!(recorded[0], ("a".to_string(), ViewSource::Recommendation));
        assert_eq!(recorded[1], ("a".to_string(), ViewSource::Search));
    }
}
