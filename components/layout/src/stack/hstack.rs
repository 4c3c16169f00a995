//! Horizontal stack layout.

use alloc::{vec, vec::Vec};
use ripple_core::{AnyView, Environment, TupleViews, View};

use crate::{
    Constraints, Layout, Point, Rect, Size, SubView,
    container::FixedContainer,
    stack::{ChildMeasurement, VerticalAlignment, stretch_share},
};

/// Layout engine shared by the public [`HStack`] view.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HStackLayout {
    /// The vertical alignment of children within the stack.
    pub alignment: VerticalAlignment,
    /// The spacing between children in the stack.
    pub spacing: u32,
}

impl HStackLayout {
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
impl Layout for HStackLayout {
    fn measure(&self, constraints: Constraints, children: &[&dyn SubView]) -> Size {
        if children.is_empty() {
            return constraints.constrain(Size::zero());
        }

        // Children see the stack's height and free width for their
        // intrinsic measurement.
        let child_constraints =
            Constraints::new(0, Constraints::INFINITY, 0, constraints.max_height);
        let measurements = Self::measure_children(children, child_constraints);

        let has_main_stretch = measurements.iter().any(|m| m.stretches_main(false));

        let non_stretch_width: u32 = measurements
            .iter()
            .filter(|m| !m.stretches_main(false))
            .map(|m| m.size.width)
            .sum();
        let intrinsic_width = non_stretch_width + self.total_spacing(children.len());

        let width = if has_main_stretch && constraints.has_bounded_width() {
            constraints.max_width
        } else {
            constraints.constrain_width(intrinsic_width)
        };

        // Height: the tallest child that does not adapt to the stack.
        let max_height = measurements
            .iter()
            .filter(|m| !m.stretches_cross(false))
            .map(|m| m.size.height)
            .max()
            .unwrap_or(0);

        Size::new(width, constraints.constrain_height(max_height))
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        if children.is_empty() {
            return vec![];
        }

        let child_constraints =
            Constraints::new(0, Constraints::INFINITY, 0, bounds.height());
        let measurements = Self::measure_children(children, child_constraints);

        let stretch_count = measurements
            .iter()
            .filter(|m| m.stretches_main(false))
            .count() as u32;
        let non_stretch_width: u32 = measurements
            .iter()
            .filter(|m| !m.stretches_main(false))
            .map(|m| m.size.width)
            .sum();
        let remaining = bounds
            .width()
            .saturating_sub(non_stretch_width + self.total_spacing(children.len()));

        let mut rects = Vec::with_capacity(children.len());
        let mut x = bounds.x();
        let mut stretch_seen = 0_u32;

        for (index, measurement) in measurements.iter().enumerate() {
            if index > 0 {
                x += self.spacing as i32;
            }

            let height = if measurement.stretches_cross(false) {
                bounds.height()
            } else {
                measurement.size.height.min(bounds.height())
            };

            let width = if measurement.stretches_main(false) {
                stretch_seen += 1;
                stretch_share(remaining, stretch_count, stretch_seen == stretch_count)
            } else {
                measurement.size.width
            };

            let y = match self.alignment {
                VerticalAlignment::Top => bounds.y(),
                VerticalAlignment::Center => {
                    bounds.y() + ((bounds.height() - height) / 2) as i32
                }
                VerticalAlignment::Bottom => bounds.y() + (bounds.height() - height) as i32,
            };

            rects.push(Rect::new(Point::new(x, y), Size::new(width, height)));
            x += width as i32;
        }

        rects
    }
}

/// A horizontal stack that arranges its children in a row.
#[derive(Debug)]
pub struct HStack {
    layout: HStackLayout,
    contents: Vec<AnyView>,
}

impl HStack {
    /// Creates a horizontal stack over the given children.
    pub fn new(contents: impl TupleViews) -> Self {
        Self {
            layout: HStackLayout::default(),
            contents: contents.into_views(),
        }
    }

    /// Sets the spacing between children.
    #[must_use]
    pub const fn spacing(mut self, spacing: u32) -> Self {
        self.layout.spacing = spacing;
        self
    }

    /// Sets the vertical alignment of children.
    #[must_use]
    pub const fn alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.layout.alignment = alignment;
        self
    }
}

impl View for HStack {
    fn body(self, _env: &Environment) -> impl View {
        FixedContainer::new(self.layout, self.contents)
    }
}

/// Creates a new horizontal stack over the given children.
pub fn hstack(contents: impl TupleViews) -> HStack {
    HStack::new(contents)
}
