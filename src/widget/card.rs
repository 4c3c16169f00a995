//! A card is a styled container that groups related content.

use ripple_core::{Environment, View};
use ripple_layout::PaddingExt;

use crate::theme::Theme;
use crate::widget::{Shape, Surface};

/// A card is a styled container that groups related content.
///
/// It has a distinct background and rounded corners so it reads as elevated
/// from the surface behind it.
#[derive(Debug)]
pub struct Card<Content: View> {
    content: Content,
}

impl<Content: View> Card<Content> {
    /// Creates a new card with the given content.
    pub const fn new(content: Content) -> Self {
        Self { content }
    }
}

impl<Content: View> View for Card<Content> {
    fn body(self, env: &Environment) -> impl View {
        // A pure widget is built by composing primitives.
        let theme = env.get::<Theme>().copied().unwrap_or_default();
        Surface::colored(theme.palette.surface)
            .shape(Shape::RoundedCorners(8))
            .content(self.content.padding(8))
    }
}

/// Convenience function to create a new [`Card`].
pub const fn card<Content: View>(content: Content) -> Card<Content> {
    Card::new(content)
}
