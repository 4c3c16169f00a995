//! A small labelled chip with a color swatch, as used by the topic grid.

use ripple_core::{Color, Environment, View};
use ripple_layout::{EdgeInsets, FrameExt, PaddingExt, hstack};
use ripple_text::text;

use crate::theme::Theme;
use crate::widget::{Shape, Surface};

/// A compact labelled chip: a small accent swatch next to its text, inside
/// a hairline-bordered rounded outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    label: String,
}

impl Chip {
    /// Creates a chip with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl View for Chip {
    fn body(self, env: &Environment) -> impl View {
        let theme = env.get::<Theme>().copied().unwrap_or_default();
        let swatch = Surface::colored(theme.palette.secondary).frame(16, 16);
        Surface::colored(theme.palette.surface)
            .shape(Shape::RoundedCorners(8))
            .border(Color::BLACK, 0)
            .content(
                hstack((swatch, text(self.label)))
                    .spacing(4)
                    .padding_with(EdgeInsets::symmetric(4, 8)),
            )
    }
}
