use super::rows::CachedRestaurantRow;
use crate::domain::entities::Restaurant;
use crate::domain::value_objects::{Freshness, GeoPoint, PriceProvenance};

/// Maps a cached row back to the public restaurant shape. Freshness is
/// always `Cached` and distance always unknown: the store never claims a row
/// is live, and distance only makes sense against a live position.
pub fn restaurant_from_row(row: CachedRestaurantRow) -> Restaurant {
    Restaurant {
        id: row.id,
        name: row.name,
        cuisine: row.cuisine,
        address: row.address,
        location: GeoPoint::new(row.latitude, row.longitude),
        price_tier: row.price_tier.clamp(0, u8::MAX as i64) as u8,
        rating: row.rating,
        near_transit: row.near_transit,
        student_discount: row.student_discount,
        average_price: row.average_price,
        price_provenance: PriceProvenance::parse(&row.price_provenance),
        open_now: row.open_now,
        image_url: row.image_url,
        thumbnail_path: row.thumbnail_path,
        distance_meters: None,
        freshness: Freshness::Cached,
    }
}
