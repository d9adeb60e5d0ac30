// Art Gallery - Core Library
// In-memory catalog of artwork records, shared safely across threads

pub mod art;
pub mod error;
pub mod gallery;

// Re-export commonly used types
pub use art::{Art, ArtBuilder, ArtKey, ArtType};
pub use error::{GalleryError, Result};
pub use gallery::{ArtGallery, Gallery, APPROX_ONE_YEAR};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
