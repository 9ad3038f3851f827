use crate::domain::value_objects::GeoPoint;
use serde::Serialize;

/// A transit station the "near transit" heuristics measure against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Station {
    pub name: &'static str,
    pub location: GeoPoint,
}

const fn station(name: &'static str, latitude: f64, longitude: f64) -> Station {
    Station {
        name,
        location: GeoPoint::new(latitude, longitude),
    }
}

/// Downtown Toronto TTC subway stations, Line 1 loop plus the nearby
/// Line 2 interchange stretch.
pub const DOWNTOWN_STATIONS: &[Station] = &[
    station("Union", 43.6453, -79.3806),
    station("King", 43.6489, -79.3780),
    station("Queen", 43.6525, -79.3791),
    station("Dundas", 43.6564, -79.3803),
    station("College", 43.6611, -79.3831),
    station("Wellesley", 43.6653, -79.3839),
    station("Bloor-Yonge", 43.6709, -79.3857),
    station("Sherbourne", 43.6721, -79.3764),
    station("Castle Frank", 43.6740, -79.3688),
    station("Bay", 43.6699, -79.3902),
    station("Museum", 43.6673, -79.3938),
    station("St George", 43.6683, -79.3999),
    station("Spadina", 43.6672, -79.4036),
    station("Bathurst", 43.6666, -79.4114),
    station("Christie", 43.6644, -79.4184),
    station("Queen's Park", 43.6599, -79.3903),
    station("St Patrick", 43.6547, -79.3883),
    station("Osgoode", 43.6507, -79.3866),
    station("St Andrew", 43.6475, -79.3846),
];
