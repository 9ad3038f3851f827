use std::io::Cursor;
use std::time::Duration;

use async_trait::async_trait;
use image::{DynamicImage, ImageFormat};

use super::error::ImageFetchError;
use crate::application::ports::ThumbnailFetcher;
use crate::shared::error::AppError;

/// Downloads a remote image, downscales it to fit the thumbnail box and
/// re-encodes it as JPEG. Every fetch is bounded by the client timeout so a
/// slow network cannot hold background capacity indefinitely.
pub struct HttpThumbnailFetcher {
    client: reqwest::Client,
}

impl HttpThumbnailFetcher {
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| AppError::Configuration(err.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ThumbnailFetcher for HttpThumbnailFetcher {
    async fn fetch_thumbnail(&self, url: &str, size_px: u32) -> Result<Vec<u8>, AppError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| ImageFetchError::Request(err.to_string()))?;

        if !response.status().is_success() {
            return Err(ImageFetchError::Status(response.status().as_u16()).into());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| ImageFetchError::Request(err.to_string()))?;

        let decoded = image::load_from_memory(&bytes)
            .map_err(|err| ImageFetchError::Decode(err.to_string()))?;
        let thumbnail = decoded.thumbnail(size_px, size_px);

        // JPEG has no alpha channel; flatten before encoding.
        let flattened = DynamicImage::ImageRgb8(thumbnail.to_rgb8());
        let mut out = Cursor::new(Vec::new());
        flattened
            .write_to(&mut out, ImageFormat::Jpeg)
            .map_err(|err| ImageFetchError::Encode(err.to_string()))?;

        Ok(out.into_inner())
    }
}
