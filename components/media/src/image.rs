//! The intrinsic size of a decoded image.

use ripple_core::layout::Size;

/// A loaded image, reduced to what layout needs: its pixel dimensions.
/// Decoding and drawing are host concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Image {
    /// Intrinsic width in dp.
    pub width: u32,
    /// Intrinsic height in dp.
    pub height: u32,
}

impl Image {
    /// Creates an image descriptor from intrinsic dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The intrinsic size as a layout [`Size`].
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
