//! A thin rule that spans its container's cross axis.

use ripple_core::{Color, raw_view};

/// A thin rule: full width in a vertical stack, full height in a
/// horizontal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Divider {
    /// Stroke thickness in dp.
    pub thickness: u32,
    /// Stroke color override; `None` uses the ambient theme color.
    pub color: Option<Color>,
}

raw_view!(Divider, ripple_core::layout::StretchAxis::CrossAxis);

impl Divider {
    /// Creates a 1dp divider in the ambient color.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            thickness: 1,
            color: None,
        }
    }

    /// Overrides the stroke color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

impl Default for Divider {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a 1dp divider.
#[must_use]
pub const fn divider() -> Divider {
    Divider::new()
}
