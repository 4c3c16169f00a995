//! Ripple: sample screens and layout primitives for declarative UIs in Rust.
//!
//! The workspace is a gallery: each module under [`screens`] rebuilds one
//! classic mobile sample screen (feeds, lists, cards, a staggered chip grid,
//! anchor layouts) on top of a compact view/layout toolkit. State is
//! explicit - screens expose a state struct and an `update` function, and
//! rendering is a pure function of that state. The [`preview`] harness
//! resolves, measures, and places a screen headlessly so geometry can be
//! inspected and tested without a host backend.

pub use ripple_controls as controls;
pub use ripple_layout as layout;
pub use ripple_list as list;
pub use ripple_media as media;
pub use ripple_text as text;

#[doc(inline)]
pub use ripple_core::{AnyView, Color, Environment, NativeView, View};

pub mod preview;
pub mod screens;
pub mod theme;
pub mod widget;

pub mod prelude {
    //! Commonly used traits and types for easy importing.

    pub use ripple_controls::{Button, Toggle, button, toggle};
    pub use ripple_core::layout::{
        Constraints, EdgeInsets, Point, Rect, Size, StretchAxis,
    };
    pub use ripple_core::{AnyView, Color, Environment, View};
    pub use ripple_layout::{
        AnchorFrame, Anchors, BaselineExt, CycleGrid, FlowColumn, Frame, FrameExt, HEdge,
        HStack, Padding, PaddingExt, ScrollView, Spacer, VEdge, VStack, cycle_grid,
        flow_column, hstack, scroll, scroll_horizontal, spacer, vstack,
    };
    pub use ripple_list::{LazyColumn, ScrollState};
    pub use ripple_media::{ContentScale, RemoteImage, remote_image};
    pub use ripple_text::{Overflow, Text, text};

    pub use crate::theme::{Theme, TextStyleExt};
    pub use crate::widget::{Card, Chip, Divider, Shape, Surface, divider};
}
