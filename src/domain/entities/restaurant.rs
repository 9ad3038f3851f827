use crate::domain::value_objects::{Freshness, GeoPoint, PriceProvenance};
use serde::{Deserialize, Serialize};

/// Public restaurant shape shared by the live-fetch collaborator and the
/// local cache. Rows served out of the cache always carry
/// `Freshness::Cached` and no distance; distance only makes sense against a
/// live position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub address: String,
    pub location: GeoPoint,
    pub price_tier: u8,
    pub rating: f64,
    pub near_transit: bool,
    pub student_discount: bool,
    pub average_price: Option<f64>,
    pub price_provenance: PriceProvenance,
    pub open_now: Option<bool>,
    pub image_url: Option<String>,
    pub thumbnail_path: Option<String>,
    pub distance_meters: Option<f64>,
    pub freshness: Freshness,
}

impl Restaurant {
    pub fn new(id: String, name: String, location: GeoPoint) -> Self {
        Self {
            id,
            name,
            cuisine: String::new(),
            address: String::new(),
            location,
            price_tier: 1,
            rating: 0.0,
            near_transit: false,
            student_discount: false,
            average_price: None,
            price_provenance: PriceProvenance::Unknown,
            open_now: None,
            image_url: None,
            thumbnail_path: None,
            distance_meters: None,
            freshness: Freshness::Live,
        }
    }
}
