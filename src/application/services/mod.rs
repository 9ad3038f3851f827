pub mod deal_service;
pub mod offline_service;
pub mod recommendation;
pub mod repeat_protection;

pub use deal_service::DealService;
pub use offline_service::{OfflineService, ThumbnailPolicy};
pub use recommendation::{RecommendationService, RecommendationSet};
pub use repeat_protection::RepeatProtectionService;
