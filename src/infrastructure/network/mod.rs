pub mod connectivity;
pub mod error;
pub mod http_thumbnail_fetcher;

pub use connectivity::ChannelConnectivity;
pub use http_thumbnail_fetcher::HttpThumbnailFetcher;
