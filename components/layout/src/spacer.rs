//! Flexible space along a stack's main axis.

use ripple_core::raw_view;

/// A view that expands along the parent stack's main axis, pushing its
/// siblings apart.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spacer;

raw_view!(Spacer, crate::StretchAxis::MainAxis);

/// Creates a new [`Spacer`].
#[must_use]
pub const fn spacer() -> Spacer {
    Spacer
}
