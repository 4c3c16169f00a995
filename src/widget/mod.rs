//! Widgets shared by the sample screens.
//!
//! Pure widgets are built by composing primitives; only [`Surface`] and
//! [`Divider`] are native leaves.

mod card;
mod chip;
mod divider;
mod surface;

pub use card::{Card, card};
pub use chip::Chip;
pub use divider::{Divider, divider};
pub use surface::{Shape, Surface, SurfaceStyle};
