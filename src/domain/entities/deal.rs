use crate::domain::value_objects::{DealKind, DealOrigin};
use serde::{Deserialize, Serialize};

/// A time-windowed cheap-price offer at a restaurant. Inserted on submission
/// or ingestion; only the vote and report counters mutate afterwards, and
/// cleanup hard-deletes the row once `valid_until` has passed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub title: String,
    pub description: String,
    pub original_price: Option<f64>,
    /// The defining "cheap" price.
    pub deal_price: f64,
    pub kind: DealKind,
    pub origin: DealOrigin,
    /// Day-of-week mask; 0 and all-bits-set both mean every day.
    pub valid_days: u8,
    /// Zero-padded "HH:MM", both bounds required for the intraday window.
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub valid_from: Option<i64>,
    pub valid_until: Option<i64>,
    pub upvotes: i64,
    pub downvotes: i64,
    pub report_count: i64,
    pub created_at: i64,
}

impl Deal {
    pub fn net_votes(&self) -> i64 {
        self.upvotes - self.downvotes
    }

    pub fn savings_amount(&self) -> Option<f64> {
        self.original_price.map(|original| original - self.deal_price)
    }

    pub fn savings_percent(&self) -> Option<f64> {
        self.original_price.and_then(|original| {
            if original > 0.0 {
                Some((1.0 - self.deal_price / original) * 100.0)
            } else {
                None
            }
        })
    }
}

/// Caller-supplied fields of a deal submission, before validation assigns an
/// id and creation instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealDraft {
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub title: String,
    pub description: String,
    pub original_price: Option<f64>,
    pub deal_price: f64,
    pub kind: DealKind,
    pub origin: DealOrigin,
    pub valid_days: u8,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub valid_from: Option<i64>,
    pub valid_until: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_deal() -> Deal {
        Deal {
            id: "deal-1".to_string(),
            restaurant_id: "resto-1".to_string(),
            restaurant_name: "Ramen Ya".to_string(),
            title: "Lunch bowl".to_string(),
            description: String::new(),
            original_price: Some(16.0),
            deal_price: 12.0,
            kind: DealKind::Daily,
            origin: DealOrigin::Official,
            valid_days: 0,
            start_time: None,
            end_time: None,
            valid_from: None,
            valid_until: None,
            upvotes: 7,
            downvotes: 2,
            report_count: 0,
            created_at: 0,
        }
    }

    #[test]
    fn net_votes_subtracts_downvotes() {
        assert_eq!(sample_deal().net_votes(), 5);
    }

    #[test]
    fn savings_derive_from_original_price() {
        let deal = sample_deal();
        assert_eq!(deal.savings_amount(), Some(4.0));
        assert_eq!(deal.savings_percent(), Some(25.0));
    }

    #[test]
    fn savings_absent_without_original_price() {
        let mut deal = sample_deal();
        deal.original_price = None;
        assert_eq!(deal.savings_amount(), None);
        assert_eq!(deal.savings_percent(), None);
    }
}
