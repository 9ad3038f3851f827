use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CachedRestaurantRow {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price_tier: i64,
    pub rating: f64,
    pub near_transit: bool,
    pub student_discount: bool,
    pub average_price: Option<f64>,
    pub price_provenance: String,
    pub open_now: Option<bool>,
    pub image_url: Option<String>,
    pub thumbnail_path: Option<String>,
    pub cached_at: i64,
    pub last_accessed_at: i64,
    pub cache_origin_lat: Option<f64>,
    pub cache_origin_lng: Option<f64>,
}
