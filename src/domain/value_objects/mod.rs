pub mod day_mask;
pub mod deal_kind;
pub mod freshness;
pub mod geo_point;
pub mod price_provenance;
pub mod restaurant_filters;
pub mod view_source;

pub use deal_kind::{DealKind, DealOrigin};
pub use freshness::Freshness;
pub use geo_point::{GeoBounds, GeoPoint};
pub use price_provenance::PriceProvenance;
pub use restaurant_filters::RestaurantFilters;
pub use view_source::ViewSource;
