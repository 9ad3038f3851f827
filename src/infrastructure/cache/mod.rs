pub mod mappers;
pub mod rows;
pub mod sqlite_store;
pub mod thumbnail_store;

pub use sqlite_store::SqliteRestaurantCache;
pub use thumbnail_store::ThumbnailStore;
