//! Scroll containers that defer behaviour to the active host backend.

use ripple_core::{AnyView, View, raw_view};

/// Defines the scrolling directions supported by [`ScrollView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[non_exhaustive]
pub enum Axis {
    /// Allow horizontal scrolling only.
    Horizontal,
    /// Allow vertical scrolling only (default).
    #[default]
    Vertical,
    /// Allow scrolling in both directions.
    All,
}

/// A scrollable view that displays content larger than its frame.
///
/// The view itself is a behavioural descriptor: it carries no offset state.
/// Scroll position lives in the host (or in an explicit scroll-state
/// container for windowed lists) and the content is re-arranged when it
/// changes.
#[derive(Debug)]
pub struct ScrollView {
    axis: Axis,
    content: AnyView,
}

raw_view!(ScrollView);

impl ScrollView {
    /// Creates a new `ScrollView` with the specified scroll axis and content.
    #[must_use]
    pub const fn new(axis: Axis, content: AnyView) -> Self {
        Self { axis, content }
    }

    /// Decomposes the `ScrollView` into its axis and content.
    #[must_use]
    pub fn into_inner(self) -> (Axis, AnyView) {
        (self.axis, self.content)
    }

    /// Creates a `ScrollView` with horizontal scrolling.
    pub fn horizontal(content: impl View) -> Self {
        Self::new(Axis::Horizontal, AnyView::new(content))
    }

    /// Creates a `ScrollView` with vertical scrolling.
    pub fn vertical(content: impl View) -> Self {
        Self::new(Axis::Vertical, AnyView::new(content))
    }
}

/// Creates a vertically scrolling view.
pub fn scroll(content: impl View) -> ScrollView {
    ScrollView::vertical(content)
}

/// Creates a horizontally scrolling view.
pub fn scroll_horizontal(content: impl View) -> ScrollView {
    ScrollView::horizontal(content)
}
