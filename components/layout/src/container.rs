//! View wrapper that lets arbitrary [`Layout`] implementations participate
//! in the view tree.

use core::fmt::Debug;

use alloc::{boxed::Box, vec::Vec};
use ripple_core::{AnyView, Native, NativeView, TupleViews, View};

use crate::{Layout, StretchAxis};

/// A view wrapper that executes an arbitrary [`Layout`] implementation over
/// a fixed list of children.
pub struct FixedContainer {
    layout: Box<dyn Layout>,
    contents: Vec<AnyView>,
}

impl Debug for FixedContainer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FixedContainer")
            .field("layout", &self.layout)
            .field("contents", &self.contents)
            .finish()
    }
}

impl FixedContainer {
    /// Wraps the supplied layout object and child views into a container
    /// view.
    pub fn new(layout: impl Layout + 'static, contents: impl TupleViews) -> Self {
        Self {
            layout: Box::new(layout),
            contents: contents.into_views(),
        }
    }

    /// Returns the boxed layout object together with the collected child
    /// views.
    #[must_use]
    pub fn into_inner(self) -> (Box<dyn Layout>, Vec<AnyView>) {
        (self.layout, self.contents)
    }
}

impl NativeView for FixedContainer {
    fn stretch_axis(&self) -> StretchAxis {
        self.layout.stretch_axis()
    }
}

impl View for FixedContainer {
    fn body(self, _env: &ripple_core::Environment) -> impl View {
        Native(self)
    }

    fn stretch_axis(&self) -> StretchAxis {
        self.layout.stretch_axis()
    }
}
