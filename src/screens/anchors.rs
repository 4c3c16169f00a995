//! The anchors screen: buttons and text positioned by edges, barriers, and
//! guidelines, with margins decoupled from the content by viewport aspect.

use ripple_controls::button;
use ripple_core::AnyView;
use ripple_core::layout::Size;
use ripple_layout::{AnchorFrame, Anchors, HEdge, VEdge};
use ripple_text::text;

/// Margin used when the viewport is portrait.
pub const PORTRAIT_MARGIN: u32 = 32;

/// Margin used when the viewport is landscape.
pub const LANDSCAPE_MARGIN: u32 = 16;

/// Picks the margin set for the viewport and renders the decoupled layout.
#[must_use]
pub fn screen(viewport: Size) -> AnyView {
    let margin = if viewport.width < viewport.height {
        PORTRAIT_MARGIN
    } else {
        LANDSCAPE_MARGIN
    };
    decoupled(margin)
}

/// A button with a text below it; only the margins vary by aspect.
#[must_use]
pub fn decoupled(margin: u32) -> AnyView {
    let mut frame = AnchorFrame::new();
    let anchor_button = frame.push(
        button(text("Button"), || {}),
        Anchors::new().top_to(VEdge::ParentTop, margin),
    );
    frame.push(
        text("Text"),
        Anchors::new().top_to(VEdge::BottomOf(anchor_button), margin),
    );
    AnyView::new(frame)
}

/// A button, a text centered under its trailing edge, and a second button
/// pushed past an end barrier over both.
#[must_use]
pub fn barrier_content() -> AnyView {
    let mut frame = AnchorFrame::new();
    let first = frame.push(
        button(text("Button"), || {}),
        Anchors::new().top_to(VEdge::ParentTop, 16),
    );
    let label = frame.push(
        text("Text"),
        Anchors::new()
            .top_to(VEdge::BottomOf(first), 16)
            .center_x_on(HEdge::EndOf(first)),
    );
    frame.push(
        button(text("Button2"), || {}),
        Anchors::new()
            .top_to(VEdge::ParentTop, 16)
            .start_to(HEdge::EndBarrier(vec![first, label]), 0),
    );
    AnyView::new(frame)
}

/// A long text spanning from the midline guideline to the parent's end.
#[must_use]
pub fn guideline_content() -> AnyView {
    let mut frame = AnchorFrame::new();
    frame.push(
        text("This is a very very very very very very very long text"),
        Anchors::new()
            .start_to(HEdge::Guideline(0.5), 0)
            .end_to(HEdge::ParentEnd, 0),
    );
    AnyView::new(frame)
}
