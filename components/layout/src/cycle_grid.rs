//! A grid that cycles children into a fixed number of horizontal rows.
//!
//! Child `i` lands in row `i % rows`; rows grow to the right in original
//! child order and stack top to bottom. The container is as wide as its
//! widest row and as tall as the sum of each row's tallest child, clamped
//! into the incoming constraints. When clamped below its natural size the
//! grid clips - it never wraps or redistributes children.
//!
//! The arrangement itself is a pure function, [`arrange`]: it performs no
//! I/O, holds no state between passes, and allocates only fixed-size row
//! accumulators, so it is safe to invoke repeatedly or concurrently for
//! independent inputs.

use core::num::NonZeroUsize;

use alloc::vec::Vec;
use ripple_core::{AnyView, Environment, TupleViews, View};

use crate::{
    Constraints, Layout, LayoutError, Point, Rect, Size, SubView, container::FixedContainer,
};

/// The result of one arrangement pass: the container size and one placement
/// per box, in original box order, relative to the container origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrangement {
    /// Final container size, clamped into the constraints.
    pub size: Size,
    /// Top-left offset of each box within the container.
    pub placements: Vec<Point>,
}

/// Arranges measured boxes into `rows` cycling rows.
///
/// Two passes: the first accumulates per-row content width and max height
/// (row offsets of later rows depend on all boxes eventually assigned to
/// earlier rows, which is only known after a full pass); the second walks
/// the boxes again in original order and assigns each its placement.
///
/// Empty rows contribute zero height but keep their slot, so the container
/// height is always the sum over all `rows` row heights.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn arrange(boxes: &[Size], rows: NonZeroUsize, constraints: Constraints) -> Arrangement {
    let rows = rows.get();

    // Row metric slots; R is known before the pass begins.
    let mut row_widths = alloc::vec![0_u32; rows].into_boxed_slice();
    let mut row_max_heights = alloc::vec![0_u32; rows].into_boxed_slice();

    for (index, item) in boxes.iter().enumerate() {
        let row = index % rows;
        row_widths[row] += item.width;
        row_max_heights[row] = row_max_heights[row].max(item.height);
    }

    let width = row_widths
        .iter()
        .copied()
        .max()
        .map_or(constraints.min_width, |w| constraints.constrain_width(w));
    let height = constraints.constrain_height(row_max_heights.iter().sum());

    // Row offsets are the prefix sums of the preceding rows' max heights.
    let mut row_y = alloc::vec![0_i32; rows].into_boxed_slice();
    for row in 1..rows {
        row_y[row] = row_y[row - 1] + row_max_heights[row - 1] as i32;
    }

    let mut running_x = alloc::vec![0_i32; rows].into_boxed_slice();
    let mut placements = Vec::with_capacity(boxes.len());
    for (index, item) in boxes.iter().enumerate() {
        let row = index % rows;
        placements.push(Point::new(running_x[row], row_y[row]));
        running_x[row] += item.width as i32;
    }

    Arrangement {
        size: Size::new(width, height),
        placements,
    }
}

/// The layout engine behind [`CycleGrid`].
///
/// Children are measured unconstrained on both passes: a cycle grid is
/// usually hosted in a scroll region and never squeezes its rows to fit
/// (clip, don't reflow).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleGridLayout {
    rows: NonZeroUsize,
}

impl CycleGridLayout {
    /// Creates a layout with the given number of rows.
    #[must_use]
    pub const fn new(rows: NonZeroUsize) -> Self {
        Self { rows }
    }

    /// Creates a layout from a plain row count, rejecting zero before any
    /// arrangement work happens.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidRowCount`] when `rows` is zero.
    pub const fn try_new(rows: usize) -> Result<Self, LayoutError> {
        match NonZeroUsize::new(rows) {
            Some(rows) => Ok(Self { rows }),
            None => Err(LayoutError::InvalidRowCount { got: rows }),
        }
    }

    /// The number of rows children cycle through.
    #[must_use]
    pub const fn rows(&self) -> NonZeroUsize {
        self.rows
    }

    fn boxes(children: &[&dyn SubView]) -> Vec<Size> {
        children
            .iter()
            .map(|child| child.measure(Constraints::unbounded()))
            .collect()
    }
}

impl Layout for CycleGridLayout {
    fn measure(&self, constraints: Constraints, children: &[&dyn SubView]) -> Size {
        arrange(&Self::boxes(children), self.rows, constraints).size
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        let boxes = Self::boxes(children);
        let arrangement = arrange(&boxes, self.rows, Constraints::loose(bounds.size()));
        boxes
            .iter()
            .zip(arrangement.placements)
            .map(|(size, offset)| {
                Rect::new(
                    Point::new(bounds.x() + offset.x, bounds.y() + offset.y),
                    *size,
                )
            })
            .collect()
    }
}

/// A view that cycles its children through a fixed number of rows.
#[derive(Debug)]
pub struct CycleGrid {
    layout: CycleGridLayout,
    contents: Vec<AnyView>,
}

impl CycleGrid {
    /// Creates a grid with the given row count.
    pub fn new(rows: NonZeroUsize, contents: impl TupleViews) -> Self {
        Self {
            layout: CycleGridLayout::new(rows),
            contents: contents.into_views(),
        }
    }

    /// Creates a grid from a plain row count.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidRowCount`] when `rows` is zero.
    pub fn try_new(rows: usize, contents: impl TupleViews) -> Result<Self, LayoutError> {
        Ok(Self {
            layout: CycleGridLayout::try_new(rows)?,
            contents: contents.into_views(),
        })
    }
}

impl View for CycleGrid {
    fn body(self, _env: &Environment) -> impl View {
        FixedContainer::new(self.layout, self.contents)
    }
}

/// Creates a new cycle grid with the specified number of rows.
pub fn cycle_grid(rows: NonZeroUsize, contents: impl TupleViews) -> CycleGrid {
    CycleGrid::new(rows, contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn sizes(pairs: &[(u32, u32)]) -> Vec<Size> {
        pairs.iter().map(|&(w, h)| Size::new(w, h)).collect()
    }

    #[test]
    fn three_rows_cycle_and_stack() {
        let boxes = sizes(&[(10, 5), (20, 8), (5, 3), (15, 6)]);
        let result = arrange(&boxes, rows(3), Constraints::unbounded());

        // Row widths [10+15, 20, 5]; row max heights [6, 8, 3].
        assert_eq!(result.size, Size::new(25, 17));
        assert_eq!(
            result.placements,
            alloc::vec![
                Point::new(0, 0),
                Point::new(0, 6),
                Point::new(0, 14),
                Point::new(10, 0),
            ]
        );
    }

    #[test]
    fn single_row_is_horizontal_flow() {
        let boxes = sizes(&[(10, 4), (7, 9), (3, 2)]);
        let result = arrange(&boxes, rows(1), Constraints::unbounded());

        assert_eq!(result.size, Size::new(20, 9));
        assert_eq!(
            result.placements,
            alloc::vec![Point::new(0, 0), Point::new(10, 0), Point::new(17, 0)]
        );
    }

    #[test]
    fn empty_rows_contribute_zero_height() {
        let boxes = sizes(&[(10, 5), (10, 7), (10, 4)]);
        let result = arrange(&boxes, rows(5), Constraints::unbounded());

        // Rows 3 and 4 are empty; height is the sum over all five rows.
        assert_eq!(result.size.height, 5 + 7 + 4);
        assert_eq!(result.size.width, 10);
        assert_eq!(
            result.placements,
            alloc::vec![Point::new(0, 0), Point::new(0, 5), Point::new(0, 12)]
        );
    }

    #[test]
    fn every_box_lands_in_its_cycled_row() {
        let boxes = sizes(&[(4, 4); 11]);
        let r = 3;
        let result = arrange(&boxes, rows(r), Constraints::unbounded());
        assert_eq!(result.placements.len(), boxes.len());

        // Row offsets: all rows have max height 4.
        for (index, placement) in result.placements.iter().enumerate() {
            let row = index % r;
            assert_eq!(placement.y, (row * 4) as i32, "box {index} row");
        }
    }

    #[test]
    fn within_row_order_is_stable() {
        // Larger boxes arriving later must not be re-ordered within the row.
        let boxes = sizes(&[(5, 5), (1, 1), (50, 2), (2, 2)]);
        let result = arrange(&boxes, rows(2), Constraints::unbounded());

        // Row 0 holds boxes 0 and 2, in arrival order.
        assert_eq!(result.placements[0], Point::new(0, 0));
        assert_eq!(result.placements[2], Point::new(5, 0));
    }

    #[test]
    fn row_offsets_are_monotonic() {
        let boxes = sizes(&[(3, 9), (4, 1), (5, 6), (6, 2), (7, 8)]);
        let result = arrange(&boxes, rows(4), Constraints::unbounded());

        let mut last_y = i32::MIN;
        for row in 0..4 {
            let y = result.placements[row].y;
            assert!(y >= last_y, "row {row} regressed");
            last_y = y;
        }
    }

    #[test]
    fn container_clamps_but_placements_do_not_reflow() {
        let boxes = sizes(&[(30, 10), (30, 10)]);
        let constraints = Constraints::new(0, 40, 0, 12);
        let result = arrange(&boxes, rows(2), constraints);

        // Natural size 30x20 exceeds the height bound: clamp, don't reflow.
        assert_eq!(result.size, Size::new(30, 12));
        assert_eq!(result.placements[1], Point::new(0, 10));
    }

    #[test]
    fn minimum_constraints_apply_to_empty_input() {
        let result = arrange(&[], rows(3), Constraints::new(17, 100, 9, 100));
        assert_eq!(result.size, Size::new(17, 9));
        assert!(result.placements.is_empty());
    }

    #[test]
    fn arrange_is_idempotent() {
        let boxes = sizes(&[(10, 5), (20, 8), (5, 3)]);
        let constraints = Constraints::new(5, 60, 0, 40);
        let first = arrange(&boxes, rows(2), constraints);
        let second = arrange(&boxes, rows(2), constraints);
        assert_eq!(first, second);
    }

    #[test]
    fn zero_rows_is_rejected_eagerly() {
        assert_eq!(
            CycleGridLayout::try_new(0),
            Err(LayoutError::InvalidRowCount { got: 0 })
        );
        assert!(CycleGridLayout::try_new(3).is_ok());
    }
}
