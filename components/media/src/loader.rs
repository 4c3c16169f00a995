//! The image-fetching seam.

use std::collections::HashMap;

use futures::future::BoxFuture;
use url::Url;

use crate::{Image, MediaError};

/// Fetches and decodes an image for a URL.
///
/// The host supplies the real implementation (HTTP fetch, cache, decode);
/// tests and previews use [`MemoryLoader`].
pub trait ImageLoader {
    /// Loads the image behind `url`.
    fn load(&self, url: &Url) -> BoxFuture<'_, Result<Image, MediaError>>;
}

/// A deterministic in-memory loader for tests and previews.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    images: HashMap<Url, Image>,
}

impl MemoryLoader {
    /// Creates an empty loader; every load fails until entries are added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `image` as the result for `url`.
    #[must_use]
    pub fn with(mut self, url: Url, image: Image) -> Self {
        self.images.insert(url, image);
        self
    }
}

impl ImageLoader for MemoryLoader {
    fn load(&self, url: &Url) -> BoxFuture<'_, Result<Image, MediaError>> {
        let result = self.images.get(url).copied().ok_or_else(|| {
            MediaError::Failed {
                url: url.to_string(),
                reason: "no entry registered".into(),
            }
        });
        Box::pin(async move { result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn sample_url() -> Url {
        Url::parse("https://example.com/robot.png").unwrap()
    }

    #[test]
    fn registered_entry_loads() {
        let loader = MemoryLoader::new().with(sample_url(), Image::new(64, 64));
        let image = block_on(loader.load(&sample_url())).unwrap();
        assert_eq!(image.size().width, 64);
    }

    #[test]
    fn missing_entry_fails() {
        let loader = MemoryLoader::new();
        let err = block_on(loader.load(&sample_url())).unwrap_err();
        assert!(matches!(err, MediaError::Failed { .. }));
    }
}
