//! Companion - AI Persona Profile
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Companion - persona profile owned by the storage layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Companion {
    /// Opaque identifier assigned by storage at creation
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    /// Avatar image path or URL
    pub src: String,
    pub name: String,
    pub description: String,
    /// Persona instructions given to the model
    pub instructions: String,
    /// Example conversation used to prime the persona
    pub seed: String,
    pub category_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Companion annotated with the number of messages stored for it.
///
/// Produced by the storage aggregation, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanionWithCount {
    pub companion: Companion,
    pub message_count: u64,
}

impl CompanionWithCount {
    pub fn new(companion: Companion, message_count: u64) -> Self {
        Self {
            companion,
            message_count,
        }
    }
}
