use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{generate_timestamp, generate_uuid_v7};

pub const EDIT_FAILED_MESSAGE: &str = "Failed to edit image. Please try a different instruction.";

/// Editing context for one dish. The original image is captured when the session opens and
/// never changes; edits only touch the working image until the session is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EditSession {
    pub id: Uuid,
    pub dish_id: Uuid,
    pub original_image: Option<String>,
    pub working_image: Option<String>,
    pub last_error: Option<String>,
    pub is_editing: bool,
    pub created_at: DateTime<Utc>,
}

impl EditSession {
    pub fn open(dish_id: Uuid, image: Option<String>) -> Self {
        Self {
            id: generate_uuid_v7(),
            dish_id,
            working_image: image.clone(),
            original_image: image,
            last_error: None,
            is_editing: false,
            created_at: generate_timestamp(),
        }
    }

    /// Revert is only offered once the working image has moved away from the original.
    pub fn can_revert(&self) -> bool {
        self.working_image != self.original_image
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSessionUpdate {
    pub working_image: Option<String>,
    pub last_error: Option<Option<String>>,
    pub is_editing: Option<bool>,
}

impl EditSessionUpdate {
    pub fn edited(working_image: String) -> Self {
        Self {
            working_image: Some(working_image),
            last_error: Some(None),
            is_editing: Some(false),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            working_image: None,
            last_error: Some(Some(message.into())),
            is_editing: Some(false),
        }
    }

    /// Releases the editing flag without touching the image.
    pub fn idle() -> Self {
        Self {
            is_editing: Some(false),
            ..Self::default()
        }
    }
}

impl EditSession {
    pub fn apply(&mut self, update: EditSessionUpdate) {
        if let Some(working_image) = update.working_image {
            self.working_image = Some(working_image);
        }
        if let Some(last_error) = update.last_error {
            self.last_error = last_error;
        }
        if let Some(is_editing) = update.is_editing {
            self.is_editing = is_editing;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeginEdit {
    Started(EditSession),
    NotFound,
    AlreadyEditing,
}
