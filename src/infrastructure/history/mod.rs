pub mod sqlite_view_history;

pub use sqlite_view_history::SqliteViewHistoryStore;
