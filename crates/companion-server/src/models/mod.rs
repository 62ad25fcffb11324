//! API Data Models

mod companion;

pub use self::companion::*;
