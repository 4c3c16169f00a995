//! Padding layouts that inset a child by fixed edge distances.

use alloc::{vec, vec::Vec};
use ripple_core::{AnyView, Environment, View};

use crate::{Constraints, EdgeInsets, Layout, Rect, Size, StretchAxis, SubView};
use crate::container::FixedContainer;

/// Layout that insets its single child by the configured edge values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaddingLayout {
    /// The edge insets around the child.
    pub edges: EdgeInsets,
}

impl Layout for PaddingLayout {
    fn measure(&self, constraints: Constraints, children: &[&dyn SubView]) -> Size {
        let child_size = children.first().map_or_else(Size::zero, |child| {
            child.measure(constraints.deflate(&self.edges))
        });

        constraints.constrain(Size::new(
            child_size.width + self.edges.horizontal(),
            child_size.height + self.edges.vertical(),
        ))
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        if children.is_empty() {
            return vec![];
        }
        vec![bounds.inset(&self.edges)]
    }
}

/// A view that surrounds its content with empty space.
#[derive(Debug)]
pub struct Padding {
    edges: EdgeInsets,
    content: AnyView,
}

impl Padding {
    /// Insets `content` by the given edges.
    pub fn new(edges: EdgeInsets, content: impl View) -> Self {
        Self {
            edges,
            content: AnyView::new(content),
        }
    }
}

impl View for Padding {
    fn body(self, _env: &Environment) -> impl View {
        FixedContainer::new(PaddingLayout { edges: self.edges }, self.content)
    }

    fn stretch_axis(&self) -> StretchAxis {
        self.content.stretch_axis()
    }
}

/// Padding for any view.
pub trait PaddingExt: View + Sized {
    /// Insets this view by `value` dp on all edges.
    fn padding(self, value: u32) -> Padding {
        self.padding_with(EdgeInsets::all(value))
    }

    /// Insets this view by the given edges.
    fn padding_with(self, edges: EdgeInsets) -> Padding {
        Padding::new(edges, self)
    }
}

impl<V: View> PaddingExt for V {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;
    use crate::tests::FixedSizeView;

    #[test]
    fn size_includes_insets() {
        let child = FixedSizeView::new(20, 10);
        let children: [&dyn SubView; 1] = [&child];
        let layout = PaddingLayout {
            edges: EdgeInsets::symmetric(4, 8),
        };

        let size = layout.measure(Constraints::unbounded(), &children);
        assert_eq!(size, Size::new(36, 18));
    }

    #[test]
    fn child_placed_inside_insets() {
        let child = FixedSizeView::new(20, 10);
        let children: [&dyn SubView; 1] = [&child];
        let layout = PaddingLayout {
            edges: EdgeInsets::new(1, 2, 3, 4),
        };

        let rects = layout.place(Rect::from_size(Size::new(27, 13)), &children);
        assert_eq!(rects[0], Rect::new(Point::new(3, 1), Size::new(20, 10)));
    }

    #[test]
    fn empty_padding_measures_to_insets_only() {
        let layout = PaddingLayout {
            edges: EdgeInsets::all(5),
        };
        let size = layout.measure(Constraints::unbounded(), &[]);
        assert_eq!(size, Size::new(10, 10));
    }
}
