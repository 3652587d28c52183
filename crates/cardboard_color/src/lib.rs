#![deny(missing_debug_implementations)]
#![allow(clippy::return_self_not_must_use)]

//! Generic RGBA colors stored as a fixed-size array of channels, plus the
//! packed 32-bit `0xRRGGBBAA` form used to write colors down as literals.

pub mod channel;
pub mod colors;
pub mod literal;
#[cfg(feature = "serde")]
mod serde_impls;

pub use channel::*;
pub use colors::*;
pub use literal::*;
