//! A tappable button with an erased label.

use alloc::boxed::Box;
use core::fmt::Debug;

use ripple_core::{AnyView, Color, View, raw_view};

use crate::Handler;

/// Configuration for the `Button` component.
#[non_exhaustive]
pub struct ButtonConfig {
    /// The label to display inside the button.
    pub label: AnyView,
    /// The action to run when the button is tapped.
    pub action: Handler,
    /// Background tint override; `None` uses the ambient theme color.
    pub tint: Option<Color>,
}

impl Debug for ButtonConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ButtonConfig")
            .field("label", &self.label)
            .field("tint", &self.tint)
            .finish_non_exhaustive()
    }
}

/// A control that runs an action when tapped.
///
/// Button sizes itself to fit its label plus platform chrome and never
/// stretches to fill extra space.
///
/// # Examples
///
/// ```ignore
/// button(text("Scroll to top"), move || dispatch(Event::ScrollToTop))
///
/// // Tinted by state
/// Button::new(text(label), on_tap).tint(Color::GREEN)
/// ```
#[derive(Debug)]
pub struct Button(ButtonConfig);

raw_view!(Button);

impl Button {
    /// Creates a button with the given label and action.
    pub fn new(label: impl View, action: impl Fn() + 'static) -> Self {
        Self(ButtonConfig {
            label: AnyView::new(label),
            action: Box::new(action),
            tint: None,
        })
    }

    /// Overrides the background tint.
    #[must_use]
    pub fn tint(mut self, tint: Color) -> Self {
        self.0.tint = Some(tint);
        self
    }

    /// Borrows the configuration.
    #[must_use]
    pub const fn config(&self) -> &ButtonConfig {
        &self.0
    }

    /// Consumes the view and returns its configuration.
    #[must_use]
    pub fn into_config(self) -> ButtonConfig {
        self.0
    }

    /// Runs the button's action, as the host does on a tap.
    pub fn tap(&self) {
        (self.0.action)();
    }
}

/// Creates a new button with the specified label and action.
pub fn button(label: impl View, action: impl Fn() + 'static) -> Button {
    Button::new(label, action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[test]
    fn tap_runs_the_action() {
        let taps = Rc::new(Cell::new(0));
        let counter = Rc::clone(&taps);
        let button = button((), move || counter.set(counter.get() + 1));

        button.tap();
        button.tap();
        assert_eq!(taps.get(), 2);
    }

    #[test]
    fn tint_override_is_recorded() {
        let button = Button::new((), || {}).tint(Color::GREEN);
        assert_eq!(button.config().tint, Some(Color::GREEN));
    }
}
