use serde::{Deserialize, Serialize};

/// WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

const METERS_PER_DEGREE_LAT: f64 = 111_320.0;

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Axis-aligned box whose half-width is `radius_meters` in both axes.
    /// Longitude spread widens with latitude; degenerate near the poles is
    /// acceptable for a city-scale app.
    pub fn bounding_box(&self, radius_meters: f64) -> GeoBounds {
        let lat_delta = radius_meters / METERS_PER_DEGREE_LAT;
        let lng_scale = self.latitude.to_radians().cos().abs().max(0.01);
        let lng_delta = radius_meters / (METERS_PER_DEGREE_LAT * lng_scale);

        GeoBounds {
            south_west: GeoPoint::new(self.latitude - lat_delta, self.longitude - lng_delta),
            north_east: GeoPoint::new(self.latitude + lat_delta, self.longitude + lng_delta),
        }
    }
}

/// Rectangular view bounds, south-west / north-east corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub south_west: GeoPoint,
    pub north_east: GeoPoint,
}

impl GeoBounds {
    pub fn new(south_west: GeoPoint, north_east: GeoPoint) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.latitude >= self.south_west.latitude
            && point.latitude <= self.north_east.latitude
            && point.longitude >= self.south_west.longitude
            && point.longitude <= self.north_east.longitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_surrounds_center() {
        let center = GeoPoint::new(43.6532, -79.3832);
        let bounds = center.bounding_box(1_000.0);

        assert!(bounds.contains(&center));
        assert!(bounds.south_west.latitude < center.latitude);
        assert!(bounds.north_east.latitude > center.latitude);
        assert!(bounds.south_west.longitude < center.longitude);
        assert!(bounds.north_east.longitude > center.longitude);
    }

    #[test]
    fn contains_excludes_outside_points() {
        let bounds = GeoBounds::new(GeoPoint::new(43.0, -80.0), GeoPoint::new(44.0, -79.0));

        assert!(bounds.contains(&GeoPoint::new(43.5, -79.5)));
        assert!(!bounds.contains(&GeoPoint::new(42.9, -79.5)));
        assert!(!bounds.contains(&GeoPoint::new(43.5, -78.9)));
    }

    #[test]
    fn boundary_points_are_inside() {
        let bounds = GeoBounds::new(GeoPoint::new(43.0, -80.0), GeoPoint::new(44.0, -79.0));
        assert!(bounds.contains(&GeoPoint::new(43.0, -80.0)));
        assert!(bounds.contains(&GeoPoint::new(44.0, -79.0)));
    }
}
