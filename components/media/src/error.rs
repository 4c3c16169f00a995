//! Media loading errors.

use thiserror::Error;

/// Errors surfaced by an [`ImageLoader`](crate::ImageLoader).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MediaError {
    /// The loader could not produce an image for the URL.
    #[error("failed to load {url}: {reason}")]
    Failed {
        /// The requested URL.
        url: String,
        /// Loader-specific failure description.
        reason: String,
    },
}
