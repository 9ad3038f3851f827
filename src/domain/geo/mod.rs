pub mod stations;

pub use stations::{Station, DOWNTOWN_STATIONS};

use crate::domain::value_objects::GeoPoint;

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle surface distance between two coordinates (haversine).
/// Non-negative and symmetric; zero for identical points within floating
/// tolerance.
pub fn distance_meters(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_METERS * h.sqrt().asin()
}

/// Closest station by surface distance; `None` for an empty set. Ties keep
/// the first-encountered station.
pub fn nearest_station<'a>(
    point: &GeoPoint,
    stations: &'a [Station],
) -> Option<(&'a Station, f64)> {
    let mut best: Option<(&Station, f64)> = None;
    for station in stations {
        let distance = distance_meters(point, &station.location);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((station, distance)),
        }
    }
    best
}

pub fn is_within_radius(point: &GeoPoint, stations: &[Station], radius_meters: f64) -> bool {
    stations
        .iter()
        .any(|station| distance_meters(point, &station.location) <= radius_meters)
}

/// All stations within `radius_meters`, ascending by distance. The sort is
/// stable, so equidistant stations keep their input order.
pub fn stations_within_radius<'a>(
    point: &GeoPoint,
    stations: &'a [Station],
    radius_meters: f64,
) -> Vec<(&'a Station, f64)> {
    let mut hits: Vec<(&Station, f64)> = stations
        .iter()
        .map(|station| (station, distance_meters(point, &station.location)))
        .filter(|(_, distance)| *distance <= radius_meters)
        .collect();

    hits.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNION: GeoPoint = GeoPoint::new(43.6453, -79.3806);
    const KING: GeoPoint = GeoPoint::new(43.6489, -79.3780);

    #[test]
    fn distance_to_self_is_zero() {
        assert!(distance_meters(&UNION, &UNION).abs() < 1e-6);
    }

    #[test]
    fn distance_is_symmetric() {
        let forward = distance_meters(&UNION, &KING);
        let backward = distance_meters(&KING, &UNION);
        assert!((forward - backward).abs() < 1e-9);
        assert!(forward > 0.0);
    }

    #[test]
    fn union_to_king_is_a_few_hundred_meters() {
        let distance = distance_meters(&UNION, &KING);
        assert!(distance > 200.0 && distance < 700.0, "got {distance}");
    }

    #[test]
    fn nearest_station_handles_empty_set() {
        assert!(nearest_station(&UNION, &[]).is_none());
    }

    #[test]
    fn nearest_station_picks_closest() {
        let (station, distance) = nearest_station(&UNION, DOWNTOWN_STATIONS).unwrap();
        assert_eq!(station.name, "Union");
        assert!(distance < 1.0);
    }

    #[test]
    fn stations_within_radius_sorted_ascending() {
        let hits = stations_within_radius(&UNION, DOWNTOWN_STATIONS, 1_500.0);
        assert!(!hits.is_empty());
        for pair in hits.windows(2) {
            assert!(pair[0].1 <= pair[1].1);
        }
        assert_eq!(hits[0].0.name, "Union");
    }

    #[test]
    fn within_radius_matches_station_list() {
        assert!(is_within_radius(&UNION, DOWNTOWN_STATIONS, 100.0));
        assert!(!is_within_radius(
            &GeoPoint::new(44.5, -80.5),
            DOWNTOWN_STATIONS,
            1_000.0
        ));
    }
}
