#![no_std]
//! Core functionality for the Ripple gallery: the [`View`] trait and its type
//! erasure, the [`Environment`] typemap, and the geometry/layout contract
//! shared by every arranger.
//!
//! This crate is `no_std` + `alloc`; nothing in it performs I/O or holds
//! shared mutable state. Layouts are pure functions from
//! (children, constraints) to (size, placements) and are recomputed per pass.

extern crate alloc;

mod macros;

pub mod color;
pub mod env;
pub mod layout;
pub mod view;

#[doc(inline)]
pub use color::Color;
#[doc(inline)]
pub use env::Environment;
#[doc(inline)]
pub use view::{AnyView, Native, NativeView, TupleViews, View};
