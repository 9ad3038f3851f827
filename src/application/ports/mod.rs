pub mod connectivity;
pub mod deal_store;
pub mod image_fetcher;
pub mod restaurant_cache;
pub mod view_history;

pub use connectivity::{ConnectivityEvent, ConnectivityProvider};
pub use deal_store::DealStore;
pub use image_fetcher::ThumbnailFetcher;
pub use restaurant_cache::RestaurantCache;
pub use view_history::ViewHistoryStore;
