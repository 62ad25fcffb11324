//! Presentation
//!
//! View models handed to the client for rendering.

mod companion_list;

pub use companion_list::*;
