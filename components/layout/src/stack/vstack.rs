//! Vertical stack layout.

use alloc::{vec, vec::Vec};
use ripple_core::{AnyView, Environment, TupleViews, View};

use crate::{
    Constraints, Layout, Point, Rect, Size, SubView,
    container::FixedContainer,
    stack::{ChildMeasurement, HorizontalAlignment, stretch_share},
};

/// Layout engine shared by the public [`VStack`] view.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VStackLayout {
    /// The horizontal alignment of children within the stack.
    pub alignment: HorizontalAlignment,
    /// The spacing between children in the stack.
    pub spacing: u32,
}

impl VStackLayout {
    fn measure_children(
        children: &[&dyn SubView],
        constraints: Constraints,
    ) -> Vec<ChildMeasurement> {
        children
            .iter()
            .map(|child| ChildMeasurement {
                size: child.measure(constraints),
                stretch_axis: child.stretch_axis(),
            })
            .collect()
    }

    const fn total_spacing(&self, count: usize) -> u32 {
        if count > 1 {
            (count as u32 - 1) * self.spacing
        } else {
            0
        }
    }
}

#[allow(clippy::cast_possible_wrap)]
impl Layout for VStackLayout {
    fn measure(&self, constraints: Constraints, children: &[&dyn SubView]) -> Size {
        if children.is_empty() {
            return constraints.constrain(Size::zero());
        }

        // Children see the stack's width (for wrapping) and free height.
        let child_constraints =
            Constraints::new(0, constraints.max_width, 0, Constraints::INFINITY);
        let measurements = Self::measure_children(children, child_constraints);

        let has_main_stretch = measurements.iter().any(|m| m.stretches_main(true));

        // Height: children stretching on the main axis report no intrinsic
        // height here; they share whatever the parent grants.
        let non_stretch_height: u32 = measurements
            .iter()
            .filter(|m| !m.stretches_main(true))
            .map(|m| m.size.height)
            .sum();
        let intrinsic_height = non_stretch_height + self.total_spacing(children.len());

        let height = if has_main_stretch && constraints.has_bounded_height() {
            constraints.max_height
        } else {
            constraints.constrain_height(intrinsic_height)
        };

        // Width: cross-stretching children adapt to the stack, so they do
        // not contribute to the intrinsic width.
        let max_width = measurements
            .iter()
            .filter(|m| !m.stretches_cross(true))
            .map(|m| m.size.width)
            .max()
            .unwrap_or(0);

        Size::new(constraints.constrain_width(max_width), height)
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        if children.is_empty() {
            return vec![];
        }

        let child_constraints =
            Constraints::new(0, bounds.width(), 0, Constraints::INFINITY);
        let measurements = Self::measure_children(children, child_constraints);

        let stretch_count = measurements
            .iter()
            .filter(|m| m.stretches_main(true))
            .count() as u32;
        let non_stretch_height: u32 = measurements
            .iter()
            .filter(|m| !m.stretches_main(true))
            .map(|m| m.size.height)
            .sum();
        let remaining = bounds
            .height()
            .saturating_sub(non_stretch_height + self.total_spacing(children.len()));

        let mut rects = Vec::with_capacity(children.len());
        let mut y = bounds.y();
        let mut stretch_seen = 0_u32;

        for (index, measurement) in measurements.iter().enumerate() {
            if index > 0 {
                y += self.spacing as i32;
            }

            let width = if measurement.stretches_cross(true) {
                bounds.width()
            } else {
                measurement.size.width.min(bounds.width())
            };

            let height = if measurement.stretches_main(true) {
                stretch_seen += 1;
                stretch_share(remaining, stretch_count, stretch_seen == stretch_count)
            } else {
                measurement.size.height
            };

            let x = match self.alignment {
                HorizontalAlignment::Leading => bounds.x(),
                HorizontalAlignment::Center => {
                    bounds.x() + ((bounds.width() - width) / 2) as i32
                }
                HorizontalAlignment::Trailing => bounds.x() + (bounds.width() - width) as i32,
            };

            rects.push(Rect::new(Point::new(x, y), Size::new(width, height)));
            y += height as i32;
        }

        rects
    }
}

/// A vertical stack that arranges its children in a column.
#[derive(Debug)]
pub struct VStack {
    layout: VStackLayout,
    contents: Vec<AnyView>,
}

impl VStack {
    /// Creates a vertical stack over the given children.
    pub fn new(contents: impl TupleViews) -> Self {
        Self {
            layout: VStackLayout::default(),
            contents: contents.into_views(),
        }
    }

    /// Sets the spacing between children.
    #[must_use]
    pub const fn spacing(mut self, spacing: u32) -> Self {
        self.layout.spacing = spacing;
        self
    }

    /// Sets the horizontal alignment of children.
    #[must_use]
    pub const fn alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.layout.alignment = alignment;
        self
    }
}

impl View for VStack {
    fn body(self, _env: &Environment) -> impl View {
        FixedContainer::new(self.layout, self.contents)
    }
}

/// Creates a new vertical stack over the given children.
pub fn vstack(contents: impl TupleViews) -> VStack {
    VStack::new(contents)
}
