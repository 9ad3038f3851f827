use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::application::ports::DealStore;
use crate::domain::entities::{Deal, DealDraft};
use crate::domain::schedule;
use crate::shared::error::AppError;

/// Price ceiling of the program; a deal above it is not "cheap" and is
/// rejected outright.
pub const MAX_DEAL_PRICE: f64 = 15.0;
pub const MIN_TITLE_CHARS: usize = 3;

/// Deal submission, voting and lifecycle. Validation failures surface as
/// explicit rejections carrying a human-readable reason.
pub struct DealService {
    store: Arc<dyn DealStore>,
}

impl DealService {
    pub fn new(store: Arc<dyn DealStore>) -> Self {
        Self { store }
    }

    pub async fn submit(&self, draft: DealDraft) -> Result<Deal, AppError> {
        Self::validate(&draft)?;

        let deal = Deal {
            id: Uuid::new_v4().to_string(),
            restaurant_id: draft.restaurant_id,
            restaurant_name: draft.restaurant_name,
            title: draft.title,
            description: draft.description,
            original_price: draft.original_price,
            deal_price: draft.deal_price,
            kind: draft.kind,
            origin: draft.origin,
            valid_days: draft.valid_days,
            start_time: draft.start_time,
            end_time: draft.end_time,
            valid_from: draft.valid_from,
            valid_until: draft.valid_until,
            upvotes: 0,
            downvotes: 0,
            report_count: 0,
            created_at: Utc::now().timestamp(),
        };

        self.store.insert(&deal).await?;
        Ok(deal)
    }

    fn validate(draft: &DealDraft) -> Result<(), AppError> {
        if draft.restaurant_id.trim().is_empty() {
            return Err(AppError::Validation(
                "A deal must name the restaurant it belongs to".to_string(),
            ));
        }
        if draft.title.trim().chars().count() < MIN_TITLE_CHARS {
            return Err(AppError::Validation(format!(
                "Deal title must be at least {MIN_TITLE_CHARS} characters"
            )));
        }
        if draft.deal_price <= 0.0 {
            return Err(AppError::Validation(
                "Deal price must be positive".to_string(),
            ));
        }
        if draft.deal_price > MAX_DEAL_PRICE {
            return Err(AppError::Validation(format!(
                "Deal price must be ${MAX_DEAL_PRICE:.0} or less"
            )));
        }
        if let Some(original) = draft.original_price {
            if original <= draft.deal_price {
                return Err(AppError::Validation(
                    "Original price must be above the deal price".to_string(),
                ));
            }
        }
        for time in [&draft.start_time, &draft.end_time].into_iter().flatten() {
            if chrono::NaiveTime::parse_from_str(time, "%H:%M").is_err() {
                return Err(AppError::Validation(format!(
                    "Time \"{time}\" must be zero-padded HH:MM"
                )));
            }
        }
        Ok(())
    }

    pub async fn deals_for_restaurant(&self, restaurant_id: &str) -> Result<Vec<Deal>, AppError> {
        self.store.deals_for_restaurant(restaurant_id).await
    }

    /// Deals whose recurring schedule and validity window are live at `now`.
    pub async fn active_deals(&self, now: DateTime<Utc>) -> Result<Vec<Deal>, AppError> {
        let deals = self.store.all_deals().await?;
        Ok(deals
            .into_iter()
            .filter(|deal| schedule::is_active_at(deal, now))
            .collect())
    }

    pub async fn vote(&self, deal_id: &str, upvote: bool) -> Result<(), AppError> {
        self.store.vote(deal_id, upvote).await
    }

    pub async fn report(&self, deal_id: &str) -> Result<(), AppError> {
        self.store.report(deal_id).await
    }

    /// Hard-deletes deals whose `valid_until` has passed.
    pub async fn cleanup_expired(&self) -> Result<u64, AppError> {
        self.store.delete_expired(Utc::now().timestamp()).await
    }
}
