#![no_std]
//! Buttons and toggles.
//!
//! Controls carry their current value and a callback; there is no binding
//! layer. The screen owns the state, the callback reports the user's intent,
//! and the host re-renders with the updated state.

extern crate alloc;

pub mod button;
pub mod toggle;

pub use button::{Button, ButtonConfig, button};
pub use toggle::{Toggle, ToggleConfig, toggle};

use alloc::boxed::Box;

/// A boxed action handler.
pub type Handler = Box<dyn Fn()>;

/// A boxed handler receiving one value.
pub type HandlerWith<T> = Box<dyn Fn(T)>;
