use std::collections::HashMap;

use crate::domain::entities::{CheapAreaHint, Restaurant};
use crate::domain::value_objects::{GeoBounds, GeoPoint};

/// Grid cell edge in degrees, roughly 300 m at Toronto's latitude. Square
/// grid bucketing instead of radial clustering: O(n) and stable across view
/// changes.
pub const GRID_SIZE_DEGREES: f64 = 0.003;
pub const MIN_CLUSTER_SIZE: usize = 3;
pub const CLUSTER_RADIUS_METERS: f64 = 300.0;
pub const FALLBACK_AVERAGE_PRICE: f64 = 12.0;

/// Density clusters of cheap restaurants inside the current view. Recomputed
/// on every call; output order between clusters is unspecified.
pub fn cheap_areas<F>(
    restaurants: &[Restaurant],
    bounds: &GeoBounds,
    is_cheap: F,
) -> Vec<CheapAreaHint>
where
    F: Fn(&Restaurant) -> bool,
{
    let qualifying: Vec<&Restaurant> = restaurants
        .iter()
        .filter(|r| bounds.contains(&r.location) && is_cheap(r))
        .collect();

    if qualifying.len() < MIN_CLUSTER_SIZE {
        return Vec::new();
    }

    // Floor semantics put exact-boundary restaurants in the lower cell.
    let mut buckets: HashMap<(i64, i64), Vec<&Restaurant>> = HashMap::new();
    for restaurant in qualifying {
        let cell = (
            (restaurant.location.latitude / GRID_SIZE_DEGREES).floor() as i64,
            (restaurant.location.longitude / GRID_SIZE_DEGREES).floor() as i64,
        );
        buckets.entry(cell).or_default().push(restaurant);
    }

    buckets
        .into_values()
        .filter(|members| members.len() >= MIN_CLUSTER_SIZE)
        .map(|members| {
            let count = members.len();
            let center = GeoPoint::new(
                members.iter().map(|r| r.location.latitude).sum::<f64>() / count as f64,
                members.iter().map(|r| r.location.longitude).sum::<f64>() / count as f64,
            );

            let known_prices: Vec<f64> =
                members.iter().filter_map(|r| r.average_price).collect();
            let average_price = if known_prices.is_empty() {
                FALLBACK_AVERAGE_PRICE
            } else {
                known_prices.iter().sum::<f64>() / known_prices.len() as f64
            };

            CheapAreaHint {
                center,
                radius_meters: CLUSTER_RADIUS_METERS,
                member_count: count,
                average_price,
                label: format!("{} spots ~${}", count, average_price.round() as i64),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(id: &str, lat: f64, lng: f64, price: Option<f64>) -> Restaurant {
        let mut r = Restaurant::new(id.to_string(), id.to_string(), GeoPoint::new(lat, lng));
        r.average_price = price;
        r
    }

    fn downtown_bounds() -> GeoBounds {
        GeoBounds::new(GeoPoint::new(43.6, -79.5), GeoPoint::new(43.7, -79.3))
    }

    #[test]
    fn fewer_than_three_qualifying_yields_no_hints() {
        let restaurants = vec![
            restaurant("a", 43.6501, -79.3801, Some(9.0)),
            restaurant("b", 43.6502, -79.3802, Some(8.0)),
        ];
        let hints = cheap_areas(&restaurants, &downtown_bounds(), |_| true);
        assert!(hints.is_empty());
    }

    #[test]
    fn three_in_one_cell_form_a_cluster() {
        let restaurants = vec![
            restaurant("a", 43.65010, -79.38010, Some(9.0)),
            restaurant("b", 43.65020, -79.38020, Some(11.0)),
            restaurant("c", 43.65030, -79.38030, Some(10.0)),
        ];
        let hints = cheap_areas(&restaurants, &downtown_bounds(), |_| true);

        assert_eq!(hints.len(), 1);
        let hint = &hints[0];
        assert_eq!(hint.member_count, 3);
        assert!((hint.average_price - 10.0).abs() < 1e-9);
        assert_eq!(hint.label, "3 spots ~$10");
        assert_eq!(hint.radius_meters, CLUSTER_RADIUS_METERS);
        assert!((hint.center.latitude - 43.6502).abs() < 1e-4);
    }

    #[test]
    fn predicate_failures_do_not_cluster() {
        let restaurants = vec![
            restaurant("a", 43.6501, -79.3801, Some(30.0)),
            restaurant("b", 43.6502, -79.3802, Some(31.0)),
            restaurant("c", 43.6503, -79.3803, Some(32.0)),
        ];
        let hints = cheap_areas(&restaurants, &downtown_bounds(), |r| {
            r.average_price.map(|p| p <= 15.0).unwrap_or(false)
        });
        assert!(hints.is_empty());
    }

    #[test]
    fn out_of_bounds_restaurants_are_ignored() {
        let restaurants = vec![
            restaurant("a", 43.6501, -79.3801, Some(9.0)),
            restaurant("b", 43.6502, -79.3802, Some(9.0)),
            // Same grid cell neighborhood but outside the view.
            restaurant("c", 44.5000, -79.3803, Some(9.0)),
        ];
        let hints = cheap_areas(&restaurants, &downtown_bounds(), |_| true);
        assert!(hints.is_empty());
    }

    #[test]
    fn unknown_prices_fall_back_to_default_average() {
        let restaurants = vec![
            restaurant("a", 43.6501, -79.3801, None),
            restaurant("b", 43.6502, -79.3802, None),
            restaurant("c", 43.6503, -79.3803, None),
        ];
        let hints = cheap_areas(&restaurants, &downtown_bounds(), |_| true);

        assert_eq!(hints.len(), 1);
        assert_eq!(hints[0].average_price, FALLBACK_AVERAGE_PRICE);
        assert_eq!(hints[0].label, "3 spots ~$12");
    }

    #[test]
    fn separate_cells_cluster_independently() {
        let mut restaurants = Vec::new();
        for i in 0..3 {
            restaurants.push(restaurant(
                &format!("near-{i}"),
                43.65010 + i as f64 * 1e-4,
                -79.38010,
                Some(10.0),
            ));
        }
        for i in 0..3 {
            restaurants.push(restaurant(
                &format!("far-{i}"),
                43.68010 + i as f64 * 1e-4,
                -79.40010,
                Some(8.0),
            ));
        }

        let hints = cheap_areas(&restaurants, &downtown_bounds(), |_| true);
        assert_eq!(hints.len(), 2);
    }
}
