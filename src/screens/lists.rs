//! The lists screen: eager and windowed lists, and an image list with
//! jump-to-edge buttons.

use ripple_controls::button;
use ripple_core::AnyView;
use ripple_layout::{FrameExt, PaddingExt, hstack, scroll, vstack};
use ripple_list::{LazyColumn, ScrollState};
use ripple_media::remote_image;
use ripple_text::text;
use url::Url;

use crate::theme::{TextStyleExt, Theme};

/// Number of rows in the image list.
pub const LIST_SIZE: usize = 100;

/// Height of one image row in dp.
pub const ROW_EXTENT: u32 = 50;

/// Gap between image rows in dp.
pub const ROW_SPACING: u32 = 10;

fn robot_source() -> Url {
    Url::parse("https://developer.android.com/images/brand/Android_Robot.png")
        .expect("static robot url is well-formed")
}

/// Explicit state for the lists screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListsState {
    /// Scroll position of the image list.
    pub scroll: ScrollState,
}

/// User intents on the lists screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListsEvent {
    /// Jump to the first row.
    ScrollToTop,
    /// Jump to the last row.
    ScrollToBottom,
}

impl ListsState {
    /// A fresh list resting at the top.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scroll: ScrollState::new(),
        }
    }

    /// Applies one event given the list viewport height in dp.
    pub const fn update(&mut self, event: ListsEvent, viewport: u32) {
        let target = match event {
            ListsEvent::ScrollToTop => 0,
            ListsEvent::ScrollToBottom => LIST_SIZE - 1,
        };
        self.scroll
            .scroll_to_item(target, ROW_EXTENT, ROW_SPACING, LIST_SIZE, viewport);
    }
}

/// Renders the image-list screen: the jump buttons above the windowed list.
pub fn screen(
    state: &ListsState,
    theme: &Theme,
    dispatch: impl Fn(ListsEvent) + Clone + 'static,
) -> AnyView {
    let to_top = dispatch.clone();
    let to_bottom = dispatch;
    AnyView::new(vstack((
        hstack((
            button(text("Scroll to top"), move || {
                to_top(ListsEvent::ScrollToTop);
            }),
            button(text("Scroll to bottom"), move || {
                to_bottom(ListsEvent::ScrollToBottom);
            }),
        ))
        .spacing(8)
        .padding(8),
        image_list(state, theme),
    )))
}

/// The windowed image list.
pub fn image_list(state: &ListsState, theme: &Theme) -> LazyColumn {
    let theme = *theme;
    LazyColumn::new(LIST_SIZE, ROW_EXTENT, move |index| {
        image_row(index, &theme)
    })
    .spacing(ROW_SPACING)
    .offset(&state.scroll)
}

/// One image row: the robot thumbnail next to its label.
pub fn image_row(index: usize, theme: &Theme) -> AnyView {
    AnyView::new(
        hstack((
            remote_image(robot_source()).frame(50, 50),
            text(format!("Item #{index}")).style(theme.typography.subtitle2),
        ))
        .spacing(10),
    )
}

/// The eager list: every row is materialised up front.
pub fn simple_list(theme: &Theme) -> AnyView {
    let rows: Vec<AnyView> = (0..LIST_SIZE)
        .map(|index| {
            AnyView::new(text(format!("Item #{index}")).style(theme.typography.body2))
        })
        .collect();
    AnyView::new(scroll(vstack(rows)))
}

/// The windowed plain-text list.
pub fn lazy_list(state: &ListsState, theme: &Theme) -> LazyColumn {
    let theme = *theme;
    LazyColumn::new(LIST_SIZE, 18, move |index| {
        AnyView::new(text(format!("Item #{index}")).style(theme.typography.body2))
    })
    .offset(&state.scroll)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: u32 = 700;

    #[test]
    fn scroll_to_bottom_then_top_round_trips() {
        let mut state = ListsState::new();

        state.update(ListsEvent::ScrollToBottom, VIEWPORT);
        let content = ripple_list::content_height(LIST_SIZE, ROW_EXTENT, ROW_SPACING);
        assert_eq!(state.scroll.offset(), content - VIEWPORT);

        state.update(ListsEvent::ScrollToTop, VIEWPORT);
        assert_eq!(state.scroll.offset(), 0);
    }

    #[test]
    fn image_list_only_materialises_the_window() {
        let state = ListsState::new();
        let theme = Theme::light();
        let list = image_list(&state, &theme);

        let window = list.window(ripple_core::layout::Size::new(360, VIEWPORT));
        // 50dp rows with 10dp gaps: ceil(700 / 60) visible, plus the edge row.
        assert!(window.len() <= 13);
        assert_eq!(window[0].0, 0);
    }
}
