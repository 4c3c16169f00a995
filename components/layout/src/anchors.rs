//! Anchor-based positioning: children pinned to parent edges, sibling
//! edges, barriers, and guidelines.
//!
//! Anchors resolve in declaration order, so a child may only reference
//! children added before it. [`AnchorFrame::push`] returns a [`ChildRef`]
//! for exactly this reason: a reference to a not-yet-added child is
//! unrepresentable.
//!
//! An anchor frame is meant to be given bounded constraints (a screen or a
//! sized box). On an unbounded axis, parent-end and guideline anchors
//! resolve to zero and the frame wraps its content.

use alloc::vec::Vec;
use ripple_core::{AnyView, Environment, View};

use crate::{Constraints, Layout, Point, Rect, Size, SubView, container::FixedContainer};

/// Handle to a child already added to an [`AnchorFrame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildRef(usize);

/// A horizontal edge to anchor against.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum HEdge {
    /// The parent's leading edge.
    ParentStart,
    /// The parent's trailing edge.
    ParentEnd,
    /// The leading edge of an earlier child.
    StartOf(ChildRef),
    /// The trailing edge of an earlier child.
    EndOf(ChildRef),
    /// The rightmost trailing edge over a set of earlier children.
    EndBarrier(Vec<ChildRef>),
    /// A vertical guideline at a fraction of the frame width from the
    /// leading edge.
    Guideline(f32),
}

/// A vertical edge to anchor against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum VEdge {
    /// The parent's top edge.
    ParentTop,
    /// The parent's bottom edge.
    ParentBottom,
    /// The top edge of an earlier child.
    TopOf(ChildRef),
    /// The bottom edge of an earlier child.
    BottomOf(ChildRef),
}

/// Per-child anchor declarations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Anchors {
    top: Option<(VEdge, u32)>,
    bottom: Option<(VEdge, u32)>,
    start: Option<(HEdge, u32)>,
    end: Option<(HEdge, u32)>,
    center_x: Option<HEdge>,
}

impl Anchors {
    /// No anchors: the child sits at the frame origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the child's top edge `margin` dp below `edge`.
    #[must_use]
    pub fn top_to(mut self, edge: VEdge, margin: u32) -> Self {
        self.top = Some((edge, margin));
        self
    }

    /// Pins the child's bottom edge `margin` dp above `edge`.
    #[must_use]
    pub fn bottom_to(mut self, edge: VEdge, margin: u32) -> Self {
        self.bottom = Some((edge, margin));
        self
    }

    /// Pins the child's leading edge `margin` dp after `edge`.
    #[must_use]
    pub fn start_to(mut self, edge: HEdge, margin: u32) -> Self {
        self.start = Some((edge, margin));
        self
    }

    /// Pins the child's trailing edge `margin` dp before `edge`.
    #[must_use]
    pub fn end_to(mut self, edge: HEdge, margin: u32) -> Self {
        self.end = Some((edge, margin));
        self
    }

    /// Centers the child horizontally on `edge`.
    #[must_use]
    pub fn center_x_on(mut self, edge: HEdge) -> Self {
        self.center_x = Some(edge);
        self
    }
}

/// Layout engine behind [`AnchorFrame`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnchorLayout {
    entries: Vec<Anchors>,
}

#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation, clippy::cast_precision_loss)]
impl AnchorLayout {
    fn h_edge(edge: &HEdge, frame_width: u32, resolved: &[Rect]) -> i32 {
        // Refs pointing outside `resolved` (a handle from another frame)
        // degrade to the frame origin.
        match edge {
            HEdge::ParentStart => 0,
            HEdge::ParentEnd => frame_width as i32,
            HEdge::StartOf(child) => resolved.get(child.0).map_or(0, Rect::min_x),
            HEdge::EndOf(child) => resolved.get(child.0).map_or(0, Rect::max_x),
            HEdge::EndBarrier(children) => children
                .iter()
                .filter_map(|child| resolved.get(child.0).map(Rect::max_x))
                .max()
                .unwrap_or(0),
            HEdge::Guideline(fraction) => (frame_width as f32 * fraction) as i32,
        }
    }

    fn v_edge(edge: VEdge, frame_height: u32, resolved: &[Rect]) -> i32 {
        match edge {
            VEdge::ParentTop => 0,
            VEdge::ParentBottom => frame_height as i32,
            VEdge::TopOf(child) => resolved.get(child.0).map_or(0, Rect::min_y),
            VEdge::BottomOf(child) => resolved.get(child.0).map_or(0, Rect::max_y),
        }
    }

    /// Resolves every child's rect, relative to the frame origin.
    ///
    /// A child pinned on both sides of an axis wraps within its segment
    /// (the span between the two anchors, margins applied) and is centered
    /// in it; otherwise it measures to its intrinsic extent.
    fn resolve(&self, frame: Size, children: &[&dyn SubView]) -> Vec<Rect> {
        let mut resolved: Vec<Rect> = Vec::with_capacity(children.len());

        for (anchors, child) in self.entries.iter().zip(children) {
            let h_span = match (&anchors.start, &anchors.end) {
                (Some((start, start_margin)), Some((end, end_margin))) => {
                    let lo =
                        Self::h_edge(start, frame.width, &resolved) + *start_margin as i32;
                    let hi = Self::h_edge(end, frame.width, &resolved) - *end_margin as i32;
                    Some((lo, hi))
                }
                _ => None,
            };
            let v_span = match (anchors.top, anchors.bottom) {
                (Some((top, top_margin)), Some((bottom, bottom_margin))) => {
                    let lo = Self::v_edge(top, frame.height, &resolved) + top_margin as i32;
                    let hi =
                        Self::v_edge(bottom, frame.height, &resolved) - bottom_margin as i32;
                    Some((lo, hi))
                }
                _ => None,
            };

            let constraints = Constraints::new(
                0,
                h_span.map_or(Constraints::INFINITY, |(lo, hi)| (hi - lo).max(0) as u32),
                0,
                v_span.map_or(Constraints::INFINITY, |(lo, hi)| (hi - lo).max(0) as u32),
            );
            let size = child.measure(constraints);
            let width = size.width as i32;
            let height = size.height as i32;

            let x = if let Some(edge) = &anchors.center_x {
                Self::h_edge(edge, frame.width, &resolved) - width / 2
            } else if let Some((lo, hi)) = h_span {
                lo + (hi - lo - width) / 2
            } else {
                match (&anchors.start, &anchors.end) {
                    (Some((start, margin)), _) => {
                        Self::h_edge(start, frame.width, &resolved) + *margin as i32
                    }
                    (None, Some((end, margin))) => {
                        Self::h_edge(end, frame.width, &resolved) - *margin as i32 - width
                    }
                    (None, None) => 0,
                }
            };

            let y = if let Some((lo, hi)) = v_span {
                lo + (hi - lo - height) / 2
            } else {
                match (anchors.top, anchors.bottom) {
                    (Some((top, margin)), _) => {
                        Self::v_edge(top, frame.height, &resolved) + margin as i32
                    }
                    (None, Some((bottom, margin))) => {
                        Self::v_edge(bottom, frame.height, &resolved) - margin as i32 - height
                    }
                    (None, None) => 0,
                }
            };

            resolved.push(Rect::new(Point::new(x, y), size));
        }

        resolved
    }
}

#[allow(clippy::cast_sign_loss)]
impl Layout for AnchorLayout {
    fn measure(&self, constraints: Constraints, children: &[&dyn SubView]) -> Size {
        let frame = Size::new(
            if constraints.has_bounded_width() {
                constraints.max_width
            } else {
                0
            },
            if constraints.has_bounded_height() {
                constraints.max_height
            } else {
                0
            },
        );
        let resolved = self.resolve(frame, children);

        let content_width = resolved.iter().map(|r| r.max_x().max(0) as u32).max().unwrap_or(0);
        let content_height = resolved.iter().map(|r| r.max_y().max(0) as u32).max().unwrap_or(0);

        Size::new(
            if constraints.has_bounded_width() {
                constraints.max_width
            } else {
                constraints.constrain_width(content_width)
            },
            if constraints.has_bounded_height() {
                constraints.max_height
            } else {
                constraints.constrain_height(content_height)
            },
        )
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        self.resolve(bounds.size(), children)
            .into_iter()
            .map(|rect| rect.translated(bounds.x(), bounds.y()))
            .collect()
    }
}

/// A view that positions its children with [`Anchors`].
#[derive(Debug, Default)]
pub struct AnchorFrame {
    layout: AnchorLayout,
    contents: Vec<AnyView>,
}

impl AnchorFrame {
    /// Creates an empty anchor frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a child with its anchors and returns a handle later children
    /// can anchor against.
    pub fn push(&mut self, view: impl View, anchors: Anchors) -> ChildRef {
        let reference = ChildRef(self.contents.len());
        self.contents.push(AnyView::new(view));
        self.layout.entries.push(anchors);
        reference
    }
}

impl View for AnchorFrame {
    fn body(self, _env: &Environment) -> impl View {
        FixedContainer::new(self.layout, self.contents)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::tests::FixedSizeView;

    fn frame_of(entries: Vec<Anchors>) -> AnchorLayout {
        AnchorLayout { entries }
    }

    #[test]
    fn parent_anchors_with_margins() {
        let button = FixedSizeView::new(80, 40);
        let children: [&dyn SubView; 1] = [&button];
        let layout = frame_of(vec![Anchors::new().top_to(VEdge::ParentTop, 16)]);

        let rects = layout.place(Rect::from_size(Size::new(360, 640)), &children);
        assert_eq!(rects[0], Rect::new(Point::new(0, 16), Size::new(80, 40)));
    }

    #[test]
    fn chained_below_and_centered_on_end() {
        let button = FixedSizeView::new(80, 40);
        let label = FixedSizeView::new(40, 20);
        let children: [&dyn SubView; 2] = [&button, &label];

        let mut entries = vec![Anchors::new().top_to(VEdge::ParentTop, 16)];
        let button_ref = ChildRef(0);
        entries.push(
            Anchors::new()
                .top_to(VEdge::BottomOf(button_ref), 16)
                .center_x_on(HEdge::EndOf(button_ref)),
        );

        let rects = frame_of(entries).place(Rect::from_size(Size::new(360, 640)), &children);
        // Label top: 16 + 40 + 16; centered on x = 80.
        assert_eq!(rects[1].y(), 72);
        assert_eq!(rects[1].x(), 80 - 20);
    }

    #[test]
    fn end_barrier_tracks_widest_child() {
        let narrow = FixedSizeView::new(50, 10);
        let wide = FixedSizeView::new(90, 10);
        let after = FixedSizeView::new(30, 10);
        let children: [&dyn SubView; 3] = [&narrow, &wide, &after];

        let entries = vec![
            Anchors::new(),
            Anchors::new().top_to(VEdge::BottomOf(ChildRef(0)), 0),
            Anchors::new().start_to(HEdge::EndBarrier(vec![ChildRef(0), ChildRef(1)]), 4),
        ];

        let rects = frame_of(entries).place(Rect::from_size(Size::new(360, 640)), &children);
        assert_eq!(rects[2].x(), 94);
    }

    #[test]
    fn guideline_and_parent_end_center_the_span() {
        let text = FixedSizeView::new(100, 20);
        let children: [&dyn SubView; 1] = [&text];
        let entries = vec![
            Anchors::new()
                .start_to(HEdge::Guideline(0.5), 0)
                .end_to(HEdge::ParentEnd, 0),
        ];

        let rects = frame_of(entries).place(Rect::from_size(Size::new(400, 640)), &children);
        // Segment [200, 400], box 100 wide, centered at 250.
        assert_eq!(rects[0].x(), 250);
    }

    #[test]
    fn push_hands_out_sequential_refs() {
        let mut frame = AnchorFrame::new();
        let first = frame.push(crate::spacer(), Anchors::new());
        let second = frame.push(
            crate::spacer(),
            Anchors::new().top_to(VEdge::BottomOf(first), 0),
        );
        assert_eq!(first, ChildRef(0));
        assert_eq!(second, ChildRef(1));
    }

    #[test]
    fn unbounded_frame_wraps_content() {
        let a = FixedSizeView::new(50, 20);
        let children: [&dyn SubView; 1] = [&a];
        let layout = frame_of(vec![Anchors::new().top_to(VEdge::ParentTop, 10)]);

        let size = layout.measure(Constraints::unbounded(), &children);
        assert_eq!(size, Size::new(50, 30));
    }
}
