use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlobError {
    /// A curve needs at least three points to be skinned.
    #[error("invalid geometry: {points} point(s), at least 3 required")]
    InvalidGeometry { points: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, BlobError>;
