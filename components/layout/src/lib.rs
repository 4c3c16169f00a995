#![no_std]
//! Layout arrangers for Ripple.
//!
//! This crate bridges the declarative [`View`](ripple_core::View) system
//! with the measure/place pass. It contains:
//!
//! - the [`CycleGrid`] row-cycling grid and its pure [`arrange`] function,
//! - stacks, a minimal [`FlowColumn`], baseline pinning, and an
//!   [`AnchorFrame`] for edge/barrier/guideline positioning,
//! - wrappers such as [`Padding`], [`Frame`], [`Spacer`], and [`ScrollView`].
//!
//! All values are integer device-independent pixels (dp); see
//! [`ripple_core::layout`] for the measurement contract. Every arranger is
//! a pure function of its children and constraints — nothing persists
//! between passes.

extern crate alloc;

pub use ripple_core::layout::*;

pub mod anchors;
pub mod baseline;
pub mod column;
pub mod container;
pub mod cycle_grid;
pub mod error;
pub mod frame;
pub mod padding;
pub mod scroll;
pub mod spacer;
pub mod stack;


pub use anchors::{AnchorFrame, Anchors, ChildRef, HEdge, VEdge};
pub use baseline::{BaselineExt, BaselineOffset};
pub use column::{FlowColumn, flow_column};
pub use container::FixedContainer;
pub use cycle_grid::{Arrangement, CycleGrid, CycleGridLayout, arrange, cycle_grid};
pub use error::LayoutError;
pub use frame::{Frame, FrameExt};
pub use padding::{Padding, PaddingExt};
pub use scroll::{ScrollView, scroll, scroll_horizontal};
pub use spacer::{Spacer, spacer};
pub use stack::{HStack, VStack, hstack, vstack};
