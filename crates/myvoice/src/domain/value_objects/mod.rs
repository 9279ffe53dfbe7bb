//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod theme;

pub use theme::*;
