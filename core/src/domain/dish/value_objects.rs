use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    aesthetic::{AestheticType, AspectRatio},
    dish::entities::Dish,
};

/// One `{name, description}` record extracted from menu text by the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ParsedDish {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct ParseMenuInput {
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct GenerateDishImageInput {
    pub dish_id: Uuid,
    pub style: Option<AestheticType>,
    pub aspect_ratio: Option<AspectRatio>,
}

#[derive(Debug, Clone, Default)]
pub struct GenerateAllInput {
    pub style: Option<AestheticType>,
    pub aspect_ratio: Option<AspectRatio>,
}

#[derive(Debug, Clone)]
pub struct UploadDishImageInput {
    pub dish_id: Uuid,
    pub mime_type: String,
    pub data: Bytes,
}

#[derive(Debug, Clone)]
pub struct SetDishAspectRatioInput {
    pub dish_id: Uuid,
    pub aspect_ratio: Option<AspectRatio>,
}

/// Everything the generation service needs to render one dish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageGenerationRequest {
    pub dish_name: String,
    pub dish_description: String,
    pub style_prompt: String,
    pub aspect_ratio: AspectRatio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NotFound,
    AlreadyGenerating,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerationOutcome {
    Generated { dish: Dish },
    Skipped { reason: SkipReason },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DishGenerationStatus {
    Generated,
    Skipped { reason: SkipReason },
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DishGenerationResult {
    pub dish_id: Uuid,
    #[serde(flatten)]
    pub status: DishGenerationStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct GenerateAllReport {
    pub results: Vec<DishGenerationResult>,
}

impl GenerateAllReport {
    pub fn generated(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status == DishGenerationStatus::Generated)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.status, DishGenerationStatus::Failed { .. }))
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishImageDownload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}
