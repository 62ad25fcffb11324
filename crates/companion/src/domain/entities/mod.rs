//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Companion: AI persona profile
//! - CompanionWithCount: Companion plus its message count (read model)
//! - Category: Grouping tag for companions

mod category;
mod companion;

pub use category::*;
pub use companion::*;
