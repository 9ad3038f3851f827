use crate::domain::value_objects::GeoPoint;
use serde::{Deserialize, Serialize};

/// Derived "cheap area" hint. Recomputed on every call; never persisted and
/// carries no identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheapAreaHint {
    pub center: GeoPoint,
    pub radius_meters: f64,
    pub member_count: usize,
    pub average_price: f64,
    pub label: String,
}
