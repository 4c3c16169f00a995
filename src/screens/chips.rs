//! The custom-layout screen: topic chips cycling through a three-row grid
//! inside a horizontal scroller, plus the flow-column and baseline demos.

use core::num::NonZeroUsize;

use ripple_core::AnyView;
use ripple_layout::{
    BaselineExt, EdgeInsets, PaddingExt, cycle_grid, flow_column, hstack, scroll_horizontal,
};
use ripple_text::text;

use crate::widget::Chip;

/// Rows the chip grid cycles through.
pub const GRID_ROWS: NonZeroUsize = NonZeroUsize::new(3).unwrap();

/// The topics shown as chips.
pub const TOPICS: [&str; 19] = [
    "Arts & Crafts",
    "Beauty",
    "Books",
    "Business",
    "Comics",
    "Culinary",
    "Design",
    "Fashion",
    "Film",
    "History",
    "Maths",
    "Music",
    "People",
    "Philosophy",
    "Religion",
    "Social sciences",
    "Technology",
    "TV",
    "Writing",
];

/// Renders the chip grid inside a horizontal scroller.
pub fn screen() -> AnyView {
    let chips: Vec<AnyView> = TOPICS
        .iter()
        .map(|topic| AnyView::new(Chip::new(*topic).padding(8)))
        .collect();
    AnyView::new(scroll_horizontal(cycle_grid(GRID_ROWS, chips)))
}

/// A handful of lines stacked by the minimal flow column.
pub fn flow_column_demo() -> AnyView {
    AnyView::new(flow_column((
        text("MyOwnColumn"),
        text("places items"),
        text("vertically."),
        text("We've done it by hand!"),
    )))
}

/// Two copies of the same text: one padded from the top edge, one pinned
/// by its baseline. The glyphs line up; the boxes don't.
pub fn baseline_demo() -> AnyView {
    AnyView::new(hstack((
        text("Hi there!").padding_with(EdgeInsets::new(32, 0, 0, 0)),
        text("Hi there!").first_baseline_to_top(32),
    )))
}
