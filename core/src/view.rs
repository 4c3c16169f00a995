//! The [`View`] trait and its type erasure.
//!
//! Views are cheap, one-shot descriptions of UI: [`View::body`] consumes the
//! value and returns the next layer of the description. Resolution walks
//! `body` until it reaches a [`Native`] leaf, which the host backend knows
//! how to measure and render. There is no retained view tree and no
//! dependency tracking; the host re-renders by calling the screen's render
//! function again with fresh state.

use alloc::{boxed::Box, vec::Vec};
use core::any::{Any, type_name};
use core::fmt::Debug;

use crate::{env::Environment, layout::StretchAxis};

// ============================================================================
// View
// ============================================================================

/// A one-shot description of a piece of UI.
pub trait View: 'static {
    /// Returns the content of this view.
    ///
    /// Composed views delegate to the views they are built from; leaf views
    /// return [`Native`] to hand off to the host backend.
    fn body(self, env: &Environment) -> impl View;

    /// Which axis (or axes) this view stretches to fill available space.
    fn stretch_axis(&self) -> StretchAxis {
        StretchAxis::None
    }
}

/// A leaf view understood directly by the host backend.
pub trait NativeView: 'static {
    /// Which axis (or axes) this view stretches to fill available space.
    fn stretch_axis(&self) -> StretchAxis {
        StretchAxis::None
    }
}

/// Marker wrapper returned by leaf views: resolution stops here and the host
/// backend takes over.
#[derive(Debug)]
pub struct Native<T: NativeView>(pub T);

impl<T: NativeView> View for Native<T> {
    fn body(self, _env: &Environment) -> impl View {
        // Resolving past a native leaf means the backend does not understand
        // it; collapse to the empty view instead of looping.
        Native(())
    }

    fn stretch_axis(&self) -> StretchAxis {
        self.0.stretch_axis()
    }
}

impl NativeView for () {}

/// The empty view.
impl View for () {
    fn body(self, _env: &Environment) -> impl View {
        Native(())
    }
}

// ============================================================================
// AnyView - type erasure
// ============================================================================

trait DynView: Any {
    fn dyn_body(self: Box<Self>, env: &Environment) -> AnyView;
    fn dyn_stretch_axis(&self) -> StretchAxis;
    fn dyn_type_name(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<V: View> DynView for V {
    fn dyn_body(self: Box<Self>, env: &Environment) -> AnyView {
        AnyView::new((*self).body(env))
    }

    fn dyn_stretch_axis(&self) -> StretchAxis {
        self.stretch_axis()
    }

    fn dyn_type_name(&self) -> &'static str {
        type_name::<V>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// A type-erased [`View`].
///
/// Containers store their children as `AnyView`; backends recover concrete
/// leaf types with [`AnyView::downcast`].
pub struct AnyView(Box<dyn DynView>);

impl AnyView {
    /// Erases the given view.
    #[must_use]
    pub fn new(view: impl View) -> Self {
        Self(Box::new(view))
    }

    /// The type name of the wrapped view (diagnostics only).
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.0.dyn_type_name()
    }

    /// Returns true if the wrapped view is a `T`.
    #[must_use]
    pub fn is<T: View>(&self) -> bool {
        self.0.as_any().is::<T>()
    }

    /// Recovers the wrapped view if it is a `T`, or returns `self` intact.
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` when the wrapped view is not a `T`.
    pub fn downcast<T: View>(self) -> Result<T, Self> {
        if self.is::<T>() {
            // Type id was checked just above; the downcast cannot fail.
            Ok(*self
                .0
                .into_any()
                .downcast::<T>()
                .expect("type id checked"))
        } else {
            Err(self)
        }
    }

    /// Borrows the wrapped view if it is a `T`.
    #[must_use]
    pub fn downcast_ref<T: View>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// Advances resolution by one step: consumes this view and returns its
    /// erased body.
    #[must_use]
    pub fn into_body(self, env: &Environment) -> Self {
        self.0.dyn_body(env)
    }
}

impl View for AnyView {
    fn body(self, env: &Environment) -> impl View {
        self.into_body(env)
    }

    fn stretch_axis(&self) -> StretchAxis {
        self.0.dyn_stretch_axis()
    }
}

impl Default for AnyView {
    fn default() -> Self {
        Self::new(())
    }
}

impl Debug for AnyView {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("AnyView").field(&self.type_name()).finish()
    }
}

// ============================================================================
// TupleViews
// ============================================================================

/// Tuples (and collections) of views that flatten into erased children.
pub trait TupleViews {
    /// Erases the contents into a flat list of children.
    fn into_views(self) -> Vec<AnyView>;
}

impl TupleViews for Vec<AnyView> {
    fn into_views(self) -> Vec<AnyView> {
        self
    }
}

impl TupleViews for AnyView {
    fn into_views(self) -> Vec<AnyView> {
        alloc::vec![self]
    }
}

impl TupleViews for () {
    fn into_views(self) -> Vec<AnyView> {
        Vec::new()
    }
}

macro_rules! impl_tuple_views {
    ($($name:ident),+) => {
        impl<$($name: View),+> TupleViews for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_views(self) -> Vec<AnyView> {
                let ($($name,)+) = self;
                alloc::vec![$(AnyView::new($name)),+]
            }
        }
    };
}

impl_tuple_views!(A);
impl_tuple_views!(A, B);
impl_tuple_views!(A, B, C);
impl_tuple_views!(A, B, C, D);
impl_tuple_views!(A, B, C, D, E);
impl_tuple_views!(A, B, C, D, E, F);
impl_tuple_views!(A, B, C, D, E, F, G);
impl_tuple_views!(A, B, C, D, E, F, G, H);
impl_tuple_views!(A, B, C, D, E, F, G, H, I);
impl_tuple_views!(A, B, C, D, E, F, G, H, I, J);
impl_tuple_views!(A, B, C, D, E, F, G, H, I, J, K);
impl_tuple_views!(A, B, C, D, E, F, G, H, I, J, K, L);
