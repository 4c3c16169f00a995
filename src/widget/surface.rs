//! A colored, optionally bordered background box.

use ripple_core::{AnyView, Color, View, raw_view};

/// The clip shape of a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shape {
    /// No clipping.
    #[default]
    Rectangle,
    /// Rounded corners with the given radius in dp.
    RoundedCorners(u32),
    /// A circle inscribed in the box.
    Circle,
}

/// Visual style of a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceStyle {
    /// Fill color.
    pub color: Color,
    /// Clip shape.
    pub shape: Shape,
    /// Border stroke, as (color, width in dp); width 0 draws a hairline.
    pub border: Option<(Color, u32)>,
}

/// A colored background box, with or without content.
///
/// Without content a surface sizes to its constraints (give it a frame);
/// with content it wraps the child.
#[derive(Debug)]
pub struct Surface {
    style: SurfaceStyle,
    content: Option<AnyView>,
}

raw_view!(Surface);

impl Surface {
    /// Creates an empty surface filled with `color`.
    #[must_use]
    pub const fn colored(color: Color) -> Self {
        Self {
            style: SurfaceStyle {
                color,
                shape: Shape::Rectangle,
                border: None,
            },
            content: None,
        }
    }

    /// Sets the clip shape.
    #[must_use]
    pub const fn shape(mut self, shape: Shape) -> Self {
        self.style.shape = shape;
        self
    }

    /// Sets the border stroke; width 0 draws a hairline.
    #[must_use]
    pub const fn border(mut self, color: Color, width: u32) -> Self {
        self.style.border = Some((color, width));
        self
    }

    /// Places content on the surface.
    #[must_use]
    pub fn content(mut self, content: impl View) -> Self {
        self.content = Some(AnyView::new(content));
        self
    }

    /// Borrows the style.
    #[must_use]
    pub const fn style(&self) -> &SurfaceStyle {
        &self.style
    }

    /// Decomposes into style and optional content.
    #[must_use]
    pub fn into_inner(self) -> (SurfaceStyle, Option<AnyView>) {
        (self.style, self.content)
    }
}
