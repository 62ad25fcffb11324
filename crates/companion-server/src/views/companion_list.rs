//! Companion List View
//!
//! Maps a set of companions (with message counts) to the view model the
//! client renders: either an empty-state placeholder or the list.

use serde::Serialize;
use utoipa::ToSchema;

use companion::CompanionWithCount;

pub const EMPTY_STATE_IMAGE_SRC: &str = "/empty.png";
pub const EMPTY_STATE_IMAGE_ALT: &str = "Empty";
pub const EMPTY_STATE_MESSAGE: &str = "No companions found.";
pub const LIST_LABEL: &str = "Companion";

/// Static image reference handed to the image renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ImagePlaceholder {
    pub src: String,
    pub alt: String,
}

/// One companion in the non-empty branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CompanionSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub src: String,
    pub user_name: String,
    pub message_count: u64,
}

impl From<&CompanionWithCount> for CompanionSummary {
    fn from(item: &CompanionWithCount) -> Self {
        Self {
            id: item.companion.id.clone(),
            name: item.companion.name.clone(),
            description: item.companion.description.clone(),
            src: item.companion.src.clone(),
            user_name: item.companion.user_name.clone(),
            message_count: item.message_count,
        }
    }
}

/// Rendered companion listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedOutput {
    Empty {
        image: ImagePlaceholder,
        message: String,
    },
    List {
        label: String,
        items: Vec<CompanionSummary>,
    },
}

impl RenderedOutput {
    pub fn is_empty_state(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

pub struct CompanionListView;

impl CompanionListView {
    /// Present companions in the order given. Never fails.
    pub fn present(items: &[CompanionWithCount]) -> RenderedOutput {
        if items.is_empty() {
            return RenderedOutput::Empty {
                image: ImagePlaceholder {
                    src: EMPTY_STATE_IMAGE_SRC.to_string(),
                    alt: EMPTY_STATE_IMAGE_ALT.to_string(),
                },
                message: EMPTY_STATE_MESSAGE.to_string(),
            };
        }

        RenderedOutput::List {
            label: LIST_LABEL.to_string(),
            items: items.iter().map(CompanionSummary::from).collect(),
        }
    }
}
