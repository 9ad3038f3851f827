use crate::domain::entities::Restaurant;
use serde::{Deserialize, Serialize};

/// AND-combined filter criteria shared by the live pipeline and cached
/// reads. An empty filter set matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantFilters {
    pub max_price_tier: Option<u8>,
    pub max_average_price: Option<f64>,
    pub min_rating: Option<f64>,
    pub cuisine: Option<String>,
    pub open_now_only: bool,
    pub near_transit_only: bool,
    pub student_discount_only: bool,
}

impl RestaurantFilters {
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        if let Some(tier) = self.max_price_tier {
            if restaurant.price_tier > tier {
                return false;
            }
        }
        if let Some(ceiling) = self.max_average_price {
            // Restaurants with no known price are kept; only a known price
            // above the ceiling excludes.
            if let Some(price) = restaurant.average_price {
                if price > ceiling {
                    return false;
                }
            }
        }
        if let Some(min) = self.min_rating {
            if restaurant.rating < min {
                return false;
            }
        }
        if let Some(ref cuisine) = self.cuisine {
            if !restaurant.cuisine.eq_ignore_ascii_case(cuisine) {
                return false;
            }
        }
        if self.open_now_only && restaurant.open_now != Some(true) {
            return false;
        }
        if self.near_transit_only && !restaurant.near_transit {
            return false;
        }
        if self.student_discount_only && !restaurant.student_discount {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::GeoPoint;

    fn restaurant() -> Restaurant {
        let mut r = Restaurant::new(
            "r1".to_string(),
            "Cheap Noodles".to_string(),
            GeoPoint::new(43.65, -79.38),
        );
        r.cuisine = "ramen".to_string();
        r.price_tier = 2;
        r.rating = 4.2;
        r.average_price = Some(11.0);
        r.near_transit = true;
        r
    }

    #[test]
    fn empty_filters_match_everything() {
        assert!(RestaurantFilters::default().matches(&restaurant()));
    }

    #[test]
    fn criteria_are_and_combined() {
        let filters = RestaurantFilters {
            max_price_tier: Some(2),
            min_rating: Some(4.0),
            near_transit_only: true,
            ..Default::default()
        };
        assert!(filters.matches(&restaurant()));

        let stricter = RestaurantFilters {
            min_rating: Some(4.5),
            ..filters
        };
        assert!(!stricter.matches(&restaurant()));
    }

    #[test]
    fn unknown_average_price_passes_price_ceiling() {
        let mut r = restaurant();
        r.average_price = None;
        let filters = RestaurantFilters {
            max_average_price: Some(10.0),
            ..Default::default()
        };
        assert!(filters.matches(&r));

        let mut pricey = restaurant();
        pricey.average_price = Some(25.0);
        assert!(!filters.matches(&pricey));
    }

    #[test]
    fn open_now_requires_known_open_flag() {
        let filters = RestaurantFilters {
            open_now_only: true,
            ..Default::default()
        };
        let mut r = restaurant();
        assert!(!filters.matches(&r));
        r.open_now = Some(true);
        assert!(filters.matches(&r));
    }
}
