//! CompanionLookup - Outcome of fetching a companion by identifier

use crate::domain::Companion;

/// Result of looking up a single companion.
///
/// An unknown identifier is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanionLookup {
    Found(Companion),
    NotFound,
}

impl CompanionLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn into_option(self) -> Option<Companion> {
        match self {
            Self::Found(companion) => Some(companion),
            Self::NotFound => None,
        }
    }
}

impl From<Option<Companion>> for CompanionLookup {
    fn from(value: Option<Companion>) -> Self {
        match value {
            Some(companion) => Self::Found(companion),
            None => Self::NotFound,
        }
    }
}
