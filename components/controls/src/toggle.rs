//! A boolean toggle switch backed by explicit state.

use alloc::boxed::Box;
use core::fmt::Debug;

use ripple_core::{AnyView, View, raw_view};

use crate::HandlerWith;

/// Configuration for the `Toggle` component.
#[non_exhaustive]
pub struct ToggleConfig {
    /// The label to display for the toggle.
    pub label: AnyView,
    /// The current on/off value.
    pub value: bool,
    /// Called with the new value when the user flips the switch.
    pub on_change: HandlerWith<bool>,
}

impl Debug for ToggleConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ToggleConfig")
            .field("label", &self.label)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// A control that toggles between on and off states.
///
/// Toggle displays a switch with an optional label and sizes itself to fit
/// them; it never stretches to fill extra space. The screen owns the value:
/// `on_change` reports the flip and the host re-renders.
///
/// # Examples
///
/// ```ignore
/// toggle(state.notifications, move |value| {
///     dispatch(SettingsEvent::Notifications(value));
/// })
/// .label(text("Notifications"))
/// ```
#[derive(Debug)]
pub struct Toggle(ToggleConfig);

raw_view!(Toggle);

impl Toggle {
    /// Creates a toggle with the given value and change handler.
    pub fn new(value: bool, on_change: impl Fn(bool) + 'static) -> Self {
        Self(ToggleConfig {
            label: AnyView::default(),
            value,
            on_change: Box::new(on_change),
        })
    }

    /// Sets the label for the toggle.
    #[must_use]
    pub fn label(mut self, view: impl View) -> Self {
        self.0.label = AnyView::new(view);
        self
    }

    /// Borrows the configuration.
    #[must_use]
    pub const fn config(&self) -> &ToggleConfig {
        &self.0
    }

    /// Consumes the view and returns its configuration.
    #[must_use]
    pub fn into_config(self) -> ToggleConfig {
        self.0
    }

    /// Flips the switch, as the host does on a tap.
    pub fn flip(&self) {
        (self.0.on_change)(!self.0.value);
    }
}

/// Creates a new toggle with the specified value and change handler.
pub fn toggle(value: bool, on_change: impl Fn(bool) + 'static) -> Toggle {
    Toggle::new(value, on_change)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[test]
    fn flip_reports_the_inverted_value() {
        let seen = Rc::new(Cell::new(None));
        let sink = Rc::clone(&seen);
        let toggle = toggle(true, move |value| sink.set(Some(value)));

        toggle.flip();
        assert_eq!(seen.get(), Some(false));
    }
}
