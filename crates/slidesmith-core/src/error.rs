use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlidesmithError {
    #[error("Image search failed for \"{query}\": {reason}")]
    ImageSearchFailed { query: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, SlidesmithError>;
