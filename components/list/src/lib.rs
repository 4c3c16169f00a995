#![no_std]
//! Scroll state and windowed lists.
//!
//! Scroll position is an explicit state container, not an observable: the
//! host mutates a [`ScrollState`] in response to input, then re-renders and
//! re-arranges. [`LazyColumn`] materialises only the rows intersecting the
//! viewport, so a thousand-item list costs a handful of views per pass.

extern crate alloc;

use alloc::boxed::Box;
use core::ops::Range;

use ripple_core::layout::{Point, Rect, Size, StretchAxis};
use ripple_core::{AnyView, impl_debug, raw_view};

// ============================================================================
// ScrollState
// ============================================================================

/// Explicit scroll position for one scrolling region, in dp from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    offset: u32,
}

impl ScrollState {
    /// A state resting at the top.
    #[must_use]
    pub const fn new() -> Self {
        Self { offset: 0 }
    }

    /// Current offset in dp.
    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Scrolls to an absolute offset, clamped so the viewport never runs
    /// past the end of the content.
    pub const fn scroll_to(&mut self, offset: u32, content: u32, viewport: u32) {
        let max = max_offset(content, viewport);
        self.offset = if offset < max { offset } else { max };
    }

    /// Scrolls by a signed delta, clamped into the valid range.
    pub const fn scroll_by(&mut self, delta: i32, content: u32, viewport: u32) {
        let target = self.offset.saturating_add_signed(delta);
        self.scroll_to(target, content, viewport);
    }

    /// Scrolls so the item at `index` sits at the top of the viewport.
    ///
    /// Works on uniform-extent content: `extent` is the per-item height and
    /// `spacing` the gap between neighbours.
    pub const fn scroll_to_item(
        &mut self,
        index: usize,
        extent: u32,
        spacing: u32,
        count: usize,
        viewport: u32,
    ) {
        let target = item_offset(index, extent, spacing);
        self.scroll_to(target, content_height(count, extent, spacing), viewport);
    }
}

/// The largest valid scroll offset for the given content and viewport.
#[must_use]
pub const fn max_offset(content: u32, viewport: u32) -> u32 {
    content.saturating_sub(viewport)
}

/// Top edge of item `index` in uniform-extent content.
#[must_use]
pub const fn item_offset(index: usize, extent: u32, spacing: u32) -> u32 {
    (index as u32) * (extent + spacing)
}

/// Total content height of `count` uniform items.
#[must_use]
pub const fn content_height(count: usize, extent: u32, spacing: u32) -> u32 {
    if count == 0 {
        0
    } else {
        (count as u32) * extent + (count as u32 - 1) * spacing
    }
}

// ============================================================================
// Windowing
// ============================================================================

/// The half-open range of items intersecting `[offset, offset + viewport)`.
///
/// General form over per-item extents, for content whose rows are not
/// uniform. Zero-height items never intersect the window.
#[must_use]
pub fn visible_range(extents: &[u32], spacing: u32, offset: u32, viewport: u32) -> Range<usize> {
    if extents.is_empty() || viewport == 0 {
        return 0..0;
    }

    let window_end = u64::from(offset) + u64::from(viewport);
    let mut top = 0_u64;
    let mut first = extents.len();
    let mut last = extents.len();

    for (index, extent) in extents.iter().enumerate() {
        let bottom = top + u64::from(*extent);
        if first == extents.len() && bottom > u64::from(offset) {
            first = index;
        }
        if top >= window_end {
            last = index;
            break;
        }
        top = bottom + u64::from(spacing);
    }

    if first == extents.len() {
        // Offset past the end: nothing visible.
        return extents.len()..extents.len();
    }
    first..last
}

// ============================================================================
// LazyColumn
// ============================================================================

/// Builds the view for one row of a [`LazyColumn`].
pub type RowBuilder = Box<dyn Fn(usize) -> AnyView>;

/// A vertically scrolling list that materialises only its visible window.
///
/// Rows have a uniform extent, which is what makes jump-to-item cheap: the
/// offset of any row is a multiplication away. The current scroll offset is
/// captured at render time from the screen's [`ScrollState`].
pub struct LazyColumn {
    count: usize,
    extent: u32,
    spacing: u32,
    offset: u32,
    builder: RowBuilder,
}

impl_debug!(LazyColumn);
raw_view!(LazyColumn, StretchAxis::Vertical);

impl LazyColumn {
    /// Creates a lazy column of `count` rows, each `extent` dp tall, built
    /// on demand by `builder`.
    pub fn new(count: usize, extent: u32, builder: impl Fn(usize) -> AnyView + 'static) -> Self {
        Self {
            count,
            extent,
            spacing: 0,
            offset: 0,
            builder: Box::new(builder),
        }
    }

    /// Sets the gap between rows.
    #[must_use]
    pub const fn spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Captures the current scroll offset.
    #[must_use]
    pub const fn offset(mut self, state: &ScrollState) -> Self {
        self.offset = state.offset();
        self
    }

    /// Number of rows.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Per-row extent in dp.
    #[must_use]
    pub const fn extent(&self) -> u32 {
        self.extent
    }

    /// Total content height in dp.
    #[must_use]
    pub const fn content_height(&self) -> u32 {
        content_height(self.count, self.extent, self.spacing)
    }

    /// The rows intersecting a viewport of the given height at the captured
    /// offset, as `(index, frame)` pairs relative to the viewport origin.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    pub fn window(&self, viewport: Size) -> alloc::vec::Vec<(usize, Rect)> {
        if self.count == 0 || viewport.height == 0 {
            return alloc::vec::Vec::new();
        }

        let step = u64::from(self.extent + self.spacing);
        let first = if step == 0 {
            0
        } else {
            (u64::from(self.offset) / step) as usize
        };
        let window_end = u64::from(self.offset) + u64::from(viewport.height);

        let mut rows = alloc::vec::Vec::new();
        let mut index = first;
        while index < self.count {
            let top = u64::from(item_offset(index, self.extent, self.spacing));
            if top >= window_end {
                break;
            }
            let y = top as i64 - i64::from(self.offset);
            rows.push((
                index,
                Rect::new(
                    Point::new(0, y as i32),
                    Size::new(viewport.width, self.extent),
                ),
            ));
            index += 1;
        }
        rows
    }

    /// Builds the view for row `index`.
    #[must_use]
    pub fn build(&self, index: usize) -> AnyView {
        (self.builder)(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn scroll_clamps_to_content_end() {
        let mut state = ScrollState::new();
        state.scroll_to(10_000, 500, 100);
        assert_eq!(state.offset(), 400);

        state.scroll_by(-1000, 500, 100);
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn viewport_taller_than_content_pins_to_top() {
        let mut state = ScrollState::new();
        state.scroll_to(50, 80, 100);
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn scroll_to_item_lands_on_row_top() {
        let mut state = ScrollState::new();
        // 100 rows of 50dp: item 99 tops out at the max offset.
        state.scroll_to_item(10, 50, 0, 100, 800);
        assert_eq!(state.offset(), 500);

        state.scroll_to_item(99, 50, 0, 100, 800);
        assert_eq!(state.offset(), 5000 - 800);
    }

    #[test]
    fn visible_range_walks_extents() {
        let extents = vec![10, 20, 30, 40];
        assert_eq!(visible_range(&extents, 0, 0, 25), 0..2);
        assert_eq!(visible_range(&extents, 0, 10, 20), 1..2);
        assert_eq!(visible_range(&extents, 0, 15, 100), 1..4);
    }

    #[test]
    fn visible_range_handles_edges() {
        let extents = vec![10, 10, 10];
        assert_eq!(visible_range(&[], 0, 0, 100), 0..0);
        assert_eq!(visible_range(&extents, 0, 0, 0), 0..0);
        // Offset past the end of the content.
        assert_eq!(visible_range(&extents, 0, 500, 100), 3..3);
    }

    #[test]
    fn visible_range_respects_spacing() {
        let extents = vec![10, 10, 10];
        // Rows occupy [0,10) [15,25) [30,40).
        assert_eq!(visible_range(&extents, 5, 11, 10), 1..2);
    }

    #[test]
    fn lazy_window_materialises_visible_rows_only() {
        let column = LazyColumn::new(100, 50, |_| AnyView::default());
        let rows = column.window(Size::new(360, 200));
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].0, 0);
        assert_eq!(rows[0].1.y(), 0);
        assert_eq!(rows[3].0, 3);
        assert_eq!(rows[3].1.y(), 150);
    }

    #[test]
    fn lazy_window_offsets_rows_by_scroll() {
        let mut state = ScrollState::new();
        let viewport = Size::new(360, 200);
        state.scroll_to(125, content_height(100, 50, 0), viewport.height);

        let column = LazyColumn::new(100, 50, |_| AnyView::default()).offset(&state);
        let rows = column.window(viewport);

        // First visible row is index 2, half scrolled off the top.
        assert_eq!(rows[0].0, 2);
        assert_eq!(rows[0].1.y(), -25);
        // The window covers [125, 325): rows 2..=6.
        assert_eq!(rows.last().unwrap().0, 6);
    }

    #[test]
    fn lazy_column_builds_rows_on_demand() {
        let column = LazyColumn::new(3, 10, |_| AnyView::default());
        assert_eq!(column.count(), 3);
        assert_eq!(column.content_height(), 30);
        assert!(column.build(2).is::<()>());
    }

    #[test]
    fn content_height_includes_spacing_between_rows() {
        assert_eq!(content_height(3, 10, 5), 40);
        assert_eq!(content_height(0, 10, 5), 0);
    }
}
