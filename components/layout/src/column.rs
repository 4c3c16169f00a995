//! A minimal top-to-bottom flow: every child at x = 0, stacked in order.
//!
//! Unlike [`VStack`](crate::stack::VStack) there is no spacing, alignment or
//! stretch distribution; the container greedily reports the maximum
//! available extent when bounded and wraps its content otherwise.

use alloc::vec::Vec;
use ripple_core::{AnyView, Environment, TupleViews, View};

use crate::{Constraints, Layout, Point, Rect, Size, SubView, container::FixedContainer};

/// The layout engine behind [`FlowColumn`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowColumnLayout;

impl FlowColumnLayout {
    fn content_size(children: &[&dyn SubView], constraints: Constraints) -> Size {
        let mut width = 0_u32;
        let mut height = 0_u32;
        for child in children {
            let size = child.measure(constraints);
            width = width.max(size.width);
            height += size.height;
        }
        Size::new(width, height)
    }
}

#[allow(clippy::cast_possible_wrap)]
impl Layout for FlowColumnLayout {
    fn measure(&self, constraints: Constraints, children: &[&dyn SubView]) -> Size {
        let content = Self::content_size(children, constraints.loosen());
        let width = if constraints.has_bounded_width() {
            constraints.max_width
        } else {
            constraints.constrain_width(content.width)
        };
        let height = if constraints.has_bounded_height() {
            constraints.max_height
        } else {
            constraints.constrain_height(content.height)
        };
        Size::new(width, height)
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        let child_constraints =
            Constraints::new(0, bounds.width(), 0, Constraints::INFINITY);

        let mut rects = Vec::with_capacity(children.len());
        let mut y = bounds.y();
        for child in children {
            let size = child.measure(child_constraints);
            rects.push(Rect::new(Point::new(bounds.x(), y), size));
            y += size.height as i32;
        }
        rects
    }
}

/// A view that stacks its children top to bottom at the leading edge.
#[derive(Debug)]
pub struct FlowColumn {
    contents: Vec<AnyView>,
}

impl FlowColumn {
    /// Creates a flow column over the given children.
    pub fn new(contents: impl TupleViews) -> Self {
        Self {
            contents: contents.into_views(),
        }
    }
}

impl View for FlowColumn {
    fn body(self, _env: &Environment) -> impl View {
        FixedContainer::new(FlowColumnLayout, self.contents)
    }
}

/// Creates a new flow column over the given children.
pub fn flow_column(contents: impl TupleViews) -> FlowColumn {
    FlowColumn::new(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::FixedSizeView;

    #[test]
    fn greedy_when_bounded() {
        let a = FixedSizeView::new(10, 5);
        let b = FixedSizeView::new(20, 7);
        let children: [&dyn SubView; 2] = [&a, &b];

        let size = FlowColumnLayout.measure(Constraints::new(0, 100, 0, 200), &children);
        assert_eq!(size, Size::new(100, 200));
    }

    #[test]
    fn wraps_content_when_unbounded() {
        let a = FixedSizeView::new(10, 5);
        let b = FixedSizeView::new(20, 7);
        let children: [&dyn SubView; 2] = [&a, &b];

        let size = FlowColumnLayout.measure(Constraints::unbounded(), &children);
        assert_eq!(size, Size::new(20, 12));
    }

    #[test]
    fn children_stack_at_leading_edge() {
        let a = FixedSizeView::new(10, 5);
        let b = FixedSizeView::new(20, 7);
        let children: [&dyn SubView; 2] = [&a, &b];

        let rects =
            FlowColumnLayout.place(Rect::from_size(Size::new(100, 200)), &children);
        assert_eq!(rects[0], Rect::new(Point::new(0, 0), Size::new(10, 5)));
        assert_eq!(rects[1], Rect::new(Point::new(0, 5), Size::new(20, 7)));
    }
}
