//! The feed screen: a story header with a click counter above a long,
//! windowed list of selectable greeting rows.

use std::collections::BTreeSet;

use ripple_controls::button;
use ripple_core::{AnyView, Color};
use ripple_layout::{FrameExt, PaddingExt, vstack};
use ripple_list::{LazyColumn, ScrollState};
use ripple_media::{ContentScale, remote_image};
use ripple_text::{Overflow, text};
use url::Url;

use crate::theme::{TextStyleExt, Theme};
use crate::widget::{Surface, divider};

/// Number of greeting rows.
pub const GREETING_COUNT: usize = 1_000;

/// Height of one greeting row: a padded body line plus the divider.
pub const ROW_EXTENT: u32 = 66;

/// Clicks after which the counter button switches to its alert tint.
pub const COUNTER_TINT_THRESHOLD: u32 = 5;

fn header_source() -> Url {
    // The host substitutes its own asset pipeline here.
    Url::parse("https://images.example.com/shark-fin-cove/header.jpg")
        .expect("static header url is well-formed")
}

/// Explicit state for the feed screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedState {
    /// How many times the counter button has been clicked.
    pub clicks: u32,
    /// Indices of greeting rows the user selected.
    pub selected: BTreeSet<usize>,
    /// Scroll position of the greeting list.
    pub scroll: ScrollState,
}

/// User intents on the feed screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedEvent {
    /// The counter button was tapped.
    CounterClicked,
    /// A greeting row was tapped, toggling its selection.
    GreetingTapped(usize),
}

impl FeedState {
    /// A fresh feed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event. The host re-renders afterwards.
    pub fn update(&mut self, event: FeedEvent) {
        match event {
            FeedEvent::CounterClicked => self.clicks += 1,
            FeedEvent::GreetingTapped(index) => {
                if !self.selected.remove(&index) {
                    self.selected.insert(index);
                }
            }
        }
    }
}

/// Renders the feed screen from its state.
pub fn screen(
    state: &FeedState,
    theme: &Theme,
    dispatch: impl Fn(FeedEvent) + Clone + 'static,
) -> AnyView {
    AnyView::new(vstack((
        story_header(state, theme, dispatch),
        greeting_list(state, theme),
    )))
}

/// The story header: cover image, title, byline, and the click counter.
pub fn story_header(
    state: &FeedState,
    theme: &Theme,
    dispatch: impl Fn(FeedEvent) + 'static,
) -> AnyView {
    let cover = remote_image(header_source())
        .content_scale(ContentScale::Crop)
        .fill_max_width()
        .height(180);

    let title = text(
        "A day wandering through the sandhills in Shark Fin Cove, \
         and a few of the sights I saw",
    )
    .style(theme.typography.h6)
    .max_lines(2)
    .overflow(Overflow::Ellipsis);

    AnyView::new(
        vstack((
            cover,
            title,
            text("Davenport, California").style(theme.typography.body2),
            text("December 2018").style(theme.typography.body2),
            counter(state.clicks, move || dispatch(FeedEvent::CounterClicked)),
        ))
        .spacing(8)
        .padding(16),
    )
}

/// The counter button; its tint flips once the threshold is crossed.
pub fn counter(clicks: u32, on_click: impl Fn() + 'static) -> AnyView {
    let tint = if clicks > COUNTER_TINT_THRESHOLD {
        Color::GREEN
    } else {
        Color::WHITE
    };
    AnyView::new(
        button(
            text(format!("I've been clicked {clicks} times.")),
            on_click,
        )
        .tint(tint),
    )
}

/// The windowed greeting list. Row taps arrive as
/// [`FeedEvent::GreetingTapped`] from the host's hit testing.
pub fn greeting_list(state: &FeedState, theme: &Theme) -> LazyColumn {
    let selected = state.selected.clone();
    let theme = *theme;
    LazyColumn::new(GREETING_COUNT, ROW_EXTENT, move |index| {
        greeting_row(index, selected.contains(&index), &theme)
    })
    .offset(&state.scroll)
}

/// One greeting row: padded text over a hairline divider; a selected row
/// gets a highlight background.
pub fn greeting_row(index: usize, selected: bool, theme: &Theme) -> AnyView {
    let background = if selected {
        Color::RED
    } else {
        Color::TRANSPARENT
    };
    let line = text(format!("Hello Android #{index}!"))
        .style(theme.typography.body2)
        .padding(24);

    AnyView::new(vstack((
        Surface::colored(background).content(line),
        divider().color(theme.palette.on_surface),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_click_increments() {
        let mut state = FeedState::new();
        state.update(FeedEvent::CounterClicked);
        state.update(FeedEvent::CounterClicked);
        assert_eq!(state.clicks, 2);
    }

    #[test]
    fn greeting_tap_toggles_selection() {
        let mut state = FeedState::new();
        state.update(FeedEvent::GreetingTapped(3));
        assert!(state.selected.contains(&3));
        state.update(FeedEvent::GreetingTapped(3));
        assert!(!state.selected.contains(&3));
    }

    #[test]
    fn greeting_list_windows_a_thousand_rows() {
        let state = FeedState::new();
        let theme = Theme::light();
        let list = greeting_list(&state, &theme);
        assert_eq!(list.count(), GREETING_COUNT);

        let window = list.window(ripple_core::layout::Size::new(360, 800));
        assert!(window.len() < 20, "window should be a handful of rows");
    }
}
