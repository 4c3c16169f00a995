#![no_std]
//! Text component for Ripple.
//!
//! Text sizes itself to fit its content and never stretches to fill extra
//! space. When the available width is limited the host wraps it to multiple
//! lines; with a line limit it truncates with an ellipsis. Shaping and
//! measurement are host concerns - this crate only describes what to draw.

extern crate alloc;

use alloc::string::String;

use ripple_core::{Color, raw_view};

/// How text behaves when it exceeds its line limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Clip the overflowing text.
    #[default]
    Clip,
    /// End the last visible line with an ellipsis.
    Ellipsis,
}

/// Configuration for text components.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct TextConfig {
    /// The string to display.
    pub content: String,
    /// Font size in dp.
    pub size: u32,
    /// Render with a bold weight.
    pub bold: bool,
    /// Foreground color override; `None` uses the ambient theme color.
    pub color: Option<Color>,
    /// Maximum number of lines; `None` wraps freely.
    pub max_lines: Option<u32>,
    /// Overflow behavior once `max_lines` is exhausted.
    pub overflow: Overflow,
}

/// A view that displays one or more lines of read-only text.
///
/// # Examples
///
/// ```ignore
/// // Simple text
/// text("Hello, World!")
///
/// // Styled text
/// text("Important").size(20).bold()
///
/// // Two lines at most, truncated with "..."
/// text(title).max_lines(2).overflow(Overflow::Ellipsis)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text(TextConfig);

raw_view!(Text);

impl Text {
    /// Default font size in dp.
    pub const DEFAULT_SIZE: u32 = 14;

    /// Creates a text view with the default style.
    pub fn new(content: impl Into<String>) -> Self {
        Self(TextConfig {
            content: content.into(),
            size: Self::DEFAULT_SIZE,
            bold: false,
            color: None,
            max_lines: None,
            overflow: Overflow::default(),
        })
    }

    /// Sets the font size in dp.
    #[must_use]
    pub const fn size(mut self, size: u32) -> Self {
        self.0.size = size;
        self
    }

    /// Renders the text with a bold weight.
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.0.bold = true;
        self
    }

    /// Overrides the foreground color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.0.color = Some(color);
        self
    }

    /// Limits the text to at most `lines` lines.
    #[must_use]
    pub const fn max_lines(mut self, lines: u32) -> Self {
        self.0.max_lines = Some(lines);
        self
    }

    /// Sets the overflow behavior.
    #[must_use]
    pub const fn overflow(mut self, overflow: Overflow) -> Self {
        self.0.overflow = overflow;
        self
    }

    /// Borrows the configuration.
    #[must_use]
    pub const fn config(&self) -> &TextConfig {
        &self.0
    }

    /// Consumes the view and returns its configuration.
    #[must_use]
    pub fn into_config(self) -> TextConfig {
        self.0
    }
}

/// Creates a text view with the default style.
pub fn text(content: impl Into<String>) -> Text {
    Text::new(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accumulates_style() {
        let t = text("hello").size(20).bold().max_lines(2).overflow(Overflow::Ellipsis);
        let config = t.config();
        assert_eq!(config.content, "hello");
        assert_eq!(config.size, 20);
        assert!(config.bold);
        assert_eq!(config.max_lines, Some(2));
        assert_eq!(config.overflow, Overflow::Ellipsis);
    }

    #[test]
    fn defaults_are_plain() {
        let config = text("x").into_config();
        assert_eq!(config.size, Text::DEFAULT_SIZE);
        assert!(!config.bold);
        assert_eq!(config.color, None);
        assert_eq!(config.max_lines, None);
    }
}
