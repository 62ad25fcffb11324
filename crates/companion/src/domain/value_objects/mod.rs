//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod companion_lookup;

pub use companion_lookup::*;
