/// Implements a basic `Debug` trait for types using their type name.
///
/// Useful for types holding boxed closures or erased children where the
/// internal structure doesn't need to be exposed.
#[macro_export]
macro_rules! impl_debug {
    ($ty:ty) => {
        impl core::fmt::Debug for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(core::any::type_name::<Self>())
            }
        }
    };
}

/// Implements a native leaf view that is handled by the host backend.
///
/// This macro implements both `NativeView` and `View` for a type. The
/// `View::body()` returns `Native(self)` so resolution terminates at the
/// leaf and the backend takes over.
///
/// # Usage
///
/// ```ignore
/// // Default stretch axis (None)
/// raw_view!(Text);
///
/// // With explicit stretch axis
/// raw_view!(Spacer, StretchAxis::MainAxis);
/// raw_view!(Divider, StretchAxis::CrossAxis);
/// ```
#[macro_export]
macro_rules! raw_view {
    // With explicit stretch axis
    ($ty:ty, $axis:expr) => {
        impl $crate::view::NativeView for $ty {
            fn stretch_axis(&self) -> $crate::layout::StretchAxis {
                $axis
            }
        }

        impl $crate::view::View for $ty {
            fn body(self, _env: &$crate::env::Environment) -> impl $crate::view::View {
                $crate::view::Native(self)
            }

            fn stretch_axis(&self) -> $crate::layout::StretchAxis {
                $axis
            }
        }
    };

    // Default stretch axis (None)
    ($ty:ty) => {
        $crate::raw_view!($ty, $crate::layout::StretchAxis::None);
    };
}
