//! The cards screen: a photographer card and an intrinsic-height
//! two-text panel split by a full-height divider.

use ripple_core::AnyView;
use ripple_layout::{
    EdgeInsets, FrameExt, PaddingExt, hstack, vstack,
    stack::VerticalAlignment,
};
use ripple_text::text;

use crate::theme::{TextStyleExt, Theme};
use crate::widget::{Card, Shape, Surface, divider};

/// Renders the cards screen.
pub fn screen(theme: &Theme) -> AnyView {
    AnyView::new(
        vstack((
            photographer_card(theme),
            two_texts("Hi", "there", theme),
        ))
        .spacing(16)
        .padding(8),
    )
}

/// A photographer card: circular avatar placeholder next to the name and a
/// de-emphasised timestamp.
pub fn photographer_card(theme: &Theme) -> AnyView {
    let avatar = Surface::colored(theme.palette.on_surface.with_alpha(51))
        .shape(Shape::Circle)
        .frame(50, 50);

    let details = vstack((
        text("Alfred Sisley").bold(),
        text("3 minutes ago")
            .style(theme.typography.body2)
            .color(theme.palette.on_surface.with_alpha(153)),
    ))
    .spacing(2)
    .padding_with(EdgeInsets::new(0, 0, 8, 0));

    AnyView::new(Card::new(
        hstack((avatar, details)).alignment(VerticalAlignment::Center),
    ))
}

/// Two equal-weight texts split by a divider that spans the row's height.
pub fn two_texts(first: &str, second: &str, theme: &Theme) -> AnyView {
    AnyView::new(hstack((
        text(first)
            .style(theme.typography.body2)
            .padding_with(EdgeInsets::new(0, 0, 4, 0))
            .fill_max_width(),
        divider().color(theme.palette.on_surface),
        text(second)
            .style(theme.typography.body2)
            .padding_with(EdgeInsets::new(0, 0, 0, 4))
            .fill_max_width(),
    )))
}
