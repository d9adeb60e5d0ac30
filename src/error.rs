// Error taxonomy for the gallery catalog
//
// Only caller input can fail. Store operations are total and signal
// absence with `None` instead of an error.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// A required Art field was missing or a value was out of range
    #[error("{0}")]
    InvalidArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
