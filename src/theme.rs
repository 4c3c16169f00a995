//! Palette and type scale, as plain data.
//!
//! The theme is inserted into the [`Environment`](ripple_core::Environment)
//! once and read wherever a widget needs a color; there are no reactive
//! theme tokens. Switching themes means re-rendering with a different
//! `Theme` value.

use ripple_core::Color;
use ripple_text::Text;

/// Core colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Brand color for prominent surfaces.
    pub primary: Color,
    /// Accent color for small emphasis marks.
    pub secondary: Color,
    /// Window background.
    pub background: Color,
    /// Card and sheet background.
    pub surface: Color,
    /// Foreground on `surface`.
    pub on_surface: Color,
}

/// One named text style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// Font size in dp.
    pub size: u32,
    /// Bold weight.
    pub bold: bool,
}

/// The type scale the screens use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Typography {
    /// Headline for story titles.
    pub h6: TextStyle,
    /// Secondary body text.
    pub body2: TextStyle,
    /// Emphasised list rows.
    pub subtitle2: TextStyle,
}

/// Palette plus type scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Core colors.
    pub palette: Palette,
    /// Type scale.
    pub typography: Typography,
}

impl Theme {
    /// The default light theme.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            palette: Palette {
                primary: Color::srgb(98, 0, 238),
                secondary: Color::srgb(3, 218, 198),
                background: Color::WHITE,
                surface: Color::WHITE,
                on_surface: Color::BLACK,
            },
            typography: Typography {
                h6: TextStyle {
                    size: 20,
                    bold: true,
                },
                body2: TextStyle {
                    size: 14,
                    bold: false,
                },
                subtitle2: TextStyle {
                    size: 14,
                    bold: true,
                },
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Applying a [`TextStyle`] to a [`Text`].
pub trait TextStyleExt {
    /// Applies the style's size and weight.
    #[must_use]
    fn style(self, style: TextStyle) -> Text;
}

impl TextStyleExt for Text {
    fn style(self, style: TextStyle) -> Text {
        let text = self.size(style.size);
        if style.bold { text.bold() } else { text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_text::text;

    #[test]
    fn style_applies_size_and_weight() {
        let theme = Theme::light();
        let styled = text("headline").style(theme.typography.h6);
        assert_eq!(styled.config().size, 20);
        assert!(styled.config().bold);
    }
}
