//! Baseline-relative positioning: pin a child's first text baseline at a
//! fixed distance from the container top.
//!
//! Padding measures from the box edge; this arranger measures from the text
//! baseline instead, so neighbouring labels with different font sizes line
//! up on their baselines rather than their tops.

use alloc::{vec, vec::Vec};
use ripple_core::{AnyView, Environment, View};

use crate::{Constraints, Layout, LayoutError, Point, Rect, Size, SubView};
use crate::container::FixedContainer;

/// Computes the vertical shift that moves a child's baseline to `target`
/// dp below the container top.
///
/// The shift is signed: a baseline already deeper than `target` pushes the
/// child up, above the container origin.
///
/// # Errors
///
/// Returns [`LayoutError::MissingBaseline`] when the child exposes no
/// baseline.
#[allow(clippy::cast_possible_wrap)]
pub const fn baseline_shift(target: u32, baseline: Option<u32>) -> Result<i32, LayoutError> {
    match baseline {
        Some(baseline) => Ok(target as i32 - baseline as i32),
        None => Err(LayoutError::MissingBaseline),
    }
}

/// Layout engine behind [`BaselineOffset`].
///
/// A child without a baseline keeps its natural position (shift 0); the
/// fallible contract lives in [`baseline_shift`] for callers that want to
/// reject such children instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaselineLayout {
    /// Desired distance from the container top to the child's baseline.
    pub distance: u32,
}

impl BaselineLayout {
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn shifted(&self, child: &dyn SubView, constraints: Constraints) -> (Size, i32) {
        let size = child.measure(constraints);
        let shift = baseline_shift(self.distance, child.baseline()).unwrap_or(0);
        let height = (size.height as i32 + shift).max(0) as u32;
        (Size::new(size.width, height), shift)
    }
}

impl Layout for BaselineLayout {
    fn measure(&self, constraints: Constraints, children: &[&dyn SubView]) -> Size {
        children.first().map_or_else(
            || constraints.constrain(Size::zero()),
            |child| {
                let (size, _) = self.shifted(*child, constraints.loosen());
                constraints.constrain(size)
            },
        )
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        let Some(child) = children.first() else {
            return vec![];
        };
        let constraints = Constraints::new(0, bounds.width(), 0, Constraints::INFINITY);
        let size = child.measure(constraints);
        let shift = baseline_shift(self.distance, child.baseline()).unwrap_or(0);
        vec![Rect::new(
            Point::new(bounds.x(), bounds.y() + shift),
            size,
        )]
    }
}

/// A view that positions its child so the child's first baseline sits
/// `distance` dp below the top.
#[derive(Debug)]
pub struct BaselineOffset {
    distance: u32,
    content: AnyView,
}

impl BaselineOffset {
    /// Wraps `content`, pinning its baseline `distance` dp from the top.
    pub fn new(distance: u32, content: impl View) -> Self {
        Self {
            distance,
            content: AnyView::new(content),
        }
    }
}

impl View for BaselineOffset {
    fn body(self, _env: &Environment) -> impl View {
        FixedContainer::new(
            BaselineLayout {
                distance: self.distance,
            },
            self.content,
        )
    }
}

/// Baseline positioning for any view.
pub trait BaselineExt: View + Sized {
    /// Pins this view's first text baseline `distance` dp below the top of
    /// the box it is placed in.
    fn first_baseline_to_top(self, distance: u32) -> BaselineOffset {
        BaselineOffset::new(distance, self)
    }
}

impl<V: View> BaselineExt for V {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::TextLikeView;

    #[test]
    fn shift_moves_baseline_to_target() {
        assert_eq!(baseline_shift(32, Some(12)), Ok(20));
        assert_eq!(baseline_shift(8, Some(12)), Ok(-4));
        assert_eq!(
            baseline_shift(32, None),
            Err(LayoutError::MissingBaseline)
        );
    }

    #[test]
    fn child_grows_by_the_shift() {
        // 40x16 text with its baseline 12dp from the top, pinned at 32dp.
        let text = TextLikeView::new(40, 16, 12);
        let children: [&dyn SubView; 1] = [&text];
        let layout = BaselineLayout { distance: 32 };

        let size = layout.measure(Constraints::unbounded(), &children);
        assert_eq!(size, Size::new(40, 36));

        let rects = layout.place(Rect::from_size(size), &children);
        assert_eq!(rects[0], Rect::new(Point::new(0, 20), Size::new(40, 16)));
    }

    #[test]
    fn negative_shift_places_child_above_origin() {
        let text = TextLikeView::new(40, 16, 12);
        let children: [&dyn SubView; 1] = [&text];
        let layout = BaselineLayout { distance: 4 };

        let size = layout.measure(Constraints::unbounded(), &children);
        assert_eq!(size, Size::new(40, 8));

        let rects = layout.place(Rect::from_size(size), &children);
        assert_eq!(rects[0].y(), -8);
    }

    #[test]
    fn missing_baseline_keeps_natural_position() {
        let plain = crate::tests::FixedSizeView::new(10, 10);
        let children: [&dyn SubView; 1] = [&plain];
        let layout = BaselineLayout { distance: 32 };

        let size = layout.measure(Constraints::unbounded(), &children);
        assert_eq!(size, Size::new(10, 10));
        let rects = layout.place(Rect::from_size(size), &children);
        assert_eq!(rects[0].y(), 0);
    }
}
