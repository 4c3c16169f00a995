//! A component that displays an image fetched by URL.

use core::fmt::Debug;

use ripple_core::layout::StretchAxis;
use ripple_core::{AnyView, View, raw_view};
use tracing::debug;
use url::Url;

use crate::{Image, ImageLoader, MediaError};

/// How an image resizes inside the box the layout gives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentScale {
    /// Scale uniformly until one axis fits; the other may leave slack.
    #[default]
    Fit,
    /// Scale uniformly until both axes are covered; overflow is clipped.
    Crop,
    /// Stretch non-uniformly to exactly fill the box.
    FillBounds,
}

/// Image loading lifecycle events.
#[derive(Debug, Clone)]
pub enum Event {
    /// The image has finished loading.
    Loaded(Image),
    /// The image has failed to load.
    Error(String),
}

type OnEvent = Box<dyn Fn(Event)>;

/// Configuration for the [`RemoteImage`] component.
#[non_exhaustive]
pub struct RemoteImageConfig {
    /// The URL of the image to display.
    pub source: Url,
    /// The view to display while the image is loading or unavailable.
    pub placeholder: AnyView,
    /// How the image resizes inside its box.
    pub content_scale: ContentScale,
    /// Lifecycle callback.
    pub on_event: OnEvent,
}

impl Debug for RemoteImageConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RemoteImageConfig")
            .field("source", &self.source)
            .field("placeholder", &self.placeholder)
            .field("content_scale", &self.content_scale)
            .finish_non_exhaustive()
    }
}

impl RemoteImageConfig {
    /// Loads the image through `loader`, reporting the outcome to the
    /// configured event callback.
    ///
    /// # Errors
    ///
    /// Propagates the loader's [`MediaError`] after reporting it.
    pub async fn load(&self, loader: &dyn ImageLoader) -> Result<Image, MediaError> {
        debug!(source = %self.source, "loading remote image");
        match loader.load(&self.source).await {
            Ok(image) => {
                (self.on_event)(Event::Loaded(image));
                Ok(image)
            }
            Err(error) => {
                debug!(source = %self.source, %error, "remote image failed");
                (self.on_event)(Event::Error(error.to_string()));
                Err(error)
            }
        }
    }
}

/// A view that displays remote imagery with a placeholder.
///
/// The image expands to fill whatever box the layout grants it; give it a
/// frame for a fixed size. The original bitmap's aspect handling is chosen
/// with [`ContentScale`].
///
/// # Examples
///
/// ```no_run
/// use ripple_media::{ContentScale, remote_image};
/// use url::Url;
///
/// let url = Url::parse("https://example.com/header.jpg").unwrap();
/// let header = remote_image(url).content_scale(ContentScale::Crop);
/// ```
#[derive(Debug)]
pub struct RemoteImage(RemoteImageConfig);

raw_view!(RemoteImage, StretchAxis::Both);

impl RemoteImage {
    /// Creates a remote image for the given source URL.
    pub fn new(source: impl Into<Url>) -> Self {
        Self(RemoteImageConfig {
            source: source.into(),
            placeholder: AnyView::default(),
            content_scale: ContentScale::default(),
            on_event: Box::new(|_event| {
                // No-op default handler
            }),
        })
    }

    /// Sets the placeholder view shown while loading or on failure.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl View) -> Self {
        self.0.placeholder = AnyView::new(placeholder);
        self
    }

    /// Sets how the image resizes inside its box.
    #[must_use]
    pub const fn content_scale(mut self, content_scale: ContentScale) -> Self {
        self.0.content_scale = content_scale;
        self
    }

    /// Sets the lifecycle event handler.
    #[must_use]
    pub fn on_event(mut self, handler: impl Fn(Event) + 'static) -> Self {
        self.0.on_event = Box::new(handler);
        self
    }

    /// Borrows the configuration.
    #[must_use]
    pub const fn config(&self) -> &RemoteImageConfig {
        &self.0
    }

    /// Consumes the view and returns its configuration.
    #[must_use]
    pub fn into_config(self) -> RemoteImageConfig {
        self.0
    }
}

/// Convenience constructor for building a [`RemoteImage`] inline.
pub fn remote_image(source: impl Into<Url>) -> RemoteImage {
    RemoteImage::new(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryLoader;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sample_url() -> Url {
        Url::parse("https://example.com/robot.png").unwrap()
    }

    #[test]
    fn load_reports_loaded_event() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let image = remote_image(sample_url()).on_event(move |event| {
            sink.borrow_mut().push(event);
        });

        let loader = MemoryLoader::new().with(sample_url(), Image::new(50, 50));
        let loaded = block_on(image.config().load(&loader)).unwrap();

        assert_eq!(loaded, Image::new(50, 50));
        assert!(matches!(events.borrow()[0], Event::Loaded(_)));
    }

    #[test]
    fn load_failure_reports_error_event() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let image = remote_image(sample_url()).on_event(move |event| {
            sink.borrow_mut().push(event);
        });

        let loader = MemoryLoader::new();
        assert!(block_on(image.config().load(&loader)).is_err());
        assert!(matches!(&events.borrow()[0], Event::Error(_)));
    }

    #[test]
    fn builder_sets_scale_and_placeholder() {
        let image = remote_image(sample_url())
            .content_scale(ContentScale::Crop)
            .placeholder(());
        assert_eq!(image.config().content_scale, ContentScale::Crop);
    }
}
