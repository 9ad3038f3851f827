use thiserror::Error;

use crate::shared::error::AppError;

#[derive(Debug, Error)]
pub enum ImageFetchError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Image decode failed: {0}")]
    Decode(String),

    #[error("Image encode failed: {0}")]
    Encode(String),
}

impl From<ImageFetchError> for AppError {
    fn from(err: ImageFetchError) -> Self {
        AppError::Network(err.to_string())
    }
}
