//! Fixed-size and fill frames that override a child's incoming constraints.

use alloc::{vec, vec::Vec};
use ripple_core::{AnyView, Environment, View};

use crate::{Constraints, Layout, Rect, Size, StretchAxis, SubView};
use crate::container::FixedContainer;

/// Layout that overrides the constraints seen by its single child.
///
/// Fixed dimensions win over fill flags; a fill flag on an unbounded axis
/// falls back to the child's intrinsic extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameLayout {
    /// Fixed width, if any.
    pub width: Option<u32>,
    /// Fixed height, if any.
    pub height: Option<u32>,
    /// Expand to the maximum available width.
    pub fill_width: bool,
    /// Expand to the maximum available height.
    pub fill_height: bool,
}

impl FrameLayout {
    fn resolve(&self, constraints: Constraints) -> Constraints {
        let (min_width, max_width) = if let Some(width) = self.width {
            let width = constraints.constrain_width(width);
            (width, width)
        } else if self.fill_width && constraints.has_bounded_width() {
            (constraints.max_width, constraints.max_width)
        } else {
            (constraints.min_width, constraints.max_width)
        };

        let (min_height, max_height) = if let Some(height) = self.height {
            let height = constraints.constrain_height(height);
            (height, height)
        } else if self.fill_height && constraints.has_bounded_height() {
            (constraints.max_height, constraints.max_height)
        } else {
            (constraints.min_height, constraints.max_height)
        };

        Constraints::new(min_width, max_width, min_height, max_height)
    }
}

impl Layout for FrameLayout {
    fn measure(&self, constraints: Constraints, children: &[&dyn SubView]) -> Size {
        let resolved = self.resolve(constraints);
        let child_size = children
            .first()
            .map_or_else(Size::zero, |child| child.measure(resolved));
        resolved.constrain(child_size)
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        if children.is_empty() {
            return vec![];
        }
        vec![bounds]
    }

    fn stretch_axis(&self) -> StretchAxis {
        match (
            self.fill_width && self.width.is_none(),
            self.fill_height && self.height.is_none(),
        ) {
            (true, true) => StretchAxis::Both,
            (true, false) => StretchAxis::Horizontal,
            (false, true) => StretchAxis::Vertical,
            (false, false) => StretchAxis::None,
        }
    }
}

/// A view that forces a size on its content or expands it to fill the
/// available space.
#[derive(Debug)]
pub struct Frame {
    layout: FrameLayout,
    content: AnyView,
}

impl Frame {
    /// Wraps `content` in the given frame.
    pub fn new(layout: FrameLayout, content: impl View) -> Self {
        Self {
            layout,
            content: AnyView::new(content),
        }
    }
}

impl View for Frame {
    fn body(self, _env: &Environment) -> impl View {
        FixedContainer::new(self.layout, self.content)
    }

    fn stretch_axis(&self) -> StretchAxis {
        self.layout.stretch_axis()
    }
}

/// Sizing overrides for any view.
pub trait FrameExt: View + Sized {
    /// Forces this view into an exact width and height.
    fn frame(self, width: u32, height: u32) -> Frame {
        Frame::new(
            FrameLayout {
                width: Some(width),
                height: Some(height),
                ..FrameLayout::default()
            },
            self,
        )
    }

    /// Forces this view's width.
    fn width(self, width: u32) -> Frame {
        Frame::new(
            FrameLayout {
                width: Some(width),
                ..FrameLayout::default()
            },
            self,
        )
    }

    /// Forces this view's height.
    fn height(self, height: u32) -> Frame {
        Frame::new(
            FrameLayout {
                height: Some(height),
                ..FrameLayout::default()
            },
            self,
        )
    }

    /// Expands this view to the maximum available width.
    fn fill_max_width(self) -> Frame {
        Frame::new(
            FrameLayout {
                fill_width: true,
                ..FrameLayout::default()
            },
            self,
        )
    }

    /// Expands this view to the maximum available height.
    fn fill_max_height(self) -> Frame {
        Frame::new(
            FrameLayout {
                fill_height: true,
                ..FrameLayout::default()
            },
            self,
        )
    }

    /// Expands this view to the maximum available size.
    fn fill_max_size(self) -> Frame {
        Frame::new(
            FrameLayout {
                fill_width: true,
                fill_height: true,
                ..FrameLayout::default()
            },
            self,
        )
    }
}

impl<V: View> FrameExt for V {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::FixedSizeView;

    #[test]
    fn fixed_frame_wins_over_child_size() {
        let child = FixedSizeView::new(100, 100);
        let children: [&dyn SubView; 1] = [&child];
        let layout = FrameLayout {
            width: Some(50),
            height: Some(50),
            ..FrameLayout::default()
        };

        let size = layout.measure(Constraints::unbounded(), &children);
        assert_eq!(size, Size::new(50, 50));
    }

    #[test]
    fn fixed_frame_respects_outer_bounds() {
        let child = FixedSizeView::new(10, 10);
        let children: [&dyn SubView; 1] = [&child];
        let layout = FrameLayout {
            width: Some(500),
            ..FrameLayout::default()
        };

        let size = layout.measure(Constraints::new(0, 200, 0, 200), &children);
        assert_eq!(size.width, 200);
    }

    #[test]
    fn fill_takes_bounded_extent() {
        let child = FixedSizeView::new(10, 10);
        let children: [&dyn SubView; 1] = [&child];
        let layout = FrameLayout {
            fill_width: true,
            ..FrameLayout::default()
        };

        let size = layout.measure(Constraints::new(0, 360, 0, 100), &children);
        assert_eq!(size, Size::new(360, 10));
        assert_eq!(layout.stretch_axis(), StretchAxis::Horizontal);
    }

    #[test]
    fn fill_on_unbounded_axis_wraps_content() {
        let child = FixedSizeView::new(10, 10);
        let children: [&dyn SubView; 1] = [&child];
        let layout = FrameLayout {
            fill_width: true,
            ..FrameLayout::default()
        };

        let size = layout.measure(Constraints::unbounded(), &children);
        assert_eq!(size.width, 10);
    }
}
