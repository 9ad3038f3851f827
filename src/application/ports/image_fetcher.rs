use crate::shared::error::AppError;
use async_trait::async_trait;

/// Port over the image-fetch collaborator: given a URL and a target pixel
/// size, produce encoded thumbnail bytes ready to persist.
#[async_trait]
pub trait ThumbnailFetcher: Send + Sync {
    async fn fetch_thumbnail(&self, url: &str, size_px: u32) -> Result<Vec<u8>, AppError>;
}
