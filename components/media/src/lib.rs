//! Remote imagery for Ripple.
//!
//! [`RemoteImage`] describes an image fetched by URL with a placeholder and
//! load/error callbacks; [`ImageLoader`] is the seam the host plugs its
//! fetching and decoding into. This crate never decodes pixels - an
//! [`Image`] is just the intrinsic size the layout system needs.

pub mod error;
pub mod image;
pub mod loader;
pub mod remote;

pub use error::MediaError;
pub use image::Image;
pub use loader::{ImageLoader, MemoryLoader};
pub use remote::{ContentScale, Event, RemoteImage, RemoteImageConfig, remote_image};
pub use url::Url;
