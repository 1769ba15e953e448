use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{aesthetic::AspectRatio, common::generate_uuid_v7};

/// A menu item tracked through its photographic lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Dish {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// `data:<mime>;base64,<payload>` URI of the current photo.
    pub image_url: Option<String>,
    pub is_generating: bool,
    pub aspect_ratio: Option<AspectRatio>,
}

impl Dish {
    pub fn new(name: String, description: String) -> Self {
        Self {
            id: generate_uuid_v7(),
            name,
            description,
            image_url: None,
            is_generating: false,
            aspect_ratio: None,
        }
    }

    /// Candidate for "generate all": no photo yet and nothing in flight.
    pub fn needs_image(&self) -> bool {
        self.image_url.is_none() && !self.is_generating
    }

    pub fn apply(&mut self, update: DishUpdate) {
        if let Some(image_url) = update.image_url {
            self.image_url = Some(image_url);
        }
        if let Some(is_generating) = update.is_generating {
            self.is_generating = is_generating;
        }
        if let Some(aspect_ratio) = update.aspect_ratio {
            self.aspect_ratio = aspect_ratio;
        }
    }
}

/// Partial update applied to a single dish in one store write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishUpdate {
    pub image_url: Option<String>,
    pub is_generating: Option<bool>,
    pub aspect_ratio: Option<Option<AspectRatio>>,
}

impl DishUpdate {
    pub fn image_generated(image_url: String) -> Self {
        Self {
            image_url: Some(image_url),
            is_generating: Some(false),
            ..Default::default()
        }
    }

    pub fn generation_failed() -> Self {
        Self {
            is_generating: Some(false),
            ..Default::default()
        }
    }

    pub fn image_replaced(image_url: String) -> Self {
        Self {
            image_url: Some(image_url),
            ..Default::default()
        }
    }

    pub fn aspect_ratio(aspect_ratio: Option<AspectRatio>) -> Self {
        Self {
            aspect_ratio: Some(aspect_ratio),
            ..Default::default()
        }
    }
}

/// Result of the store's atomic check-and-set on `is_generating`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeginGeneration {
    Started(Dish),
    NotFound,
    AlreadyGenerating,
}
