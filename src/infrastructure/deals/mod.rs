pub mod sqlite_deal_store;

pub use sqlite_deal_store::SqliteDealStore;
