use lumina_core::domain::aesthetic::{AestheticType, AspectRatio};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Overrides for a single generation. Missing fields fall back to the dish and studio settings.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateDishImageValidator {
    #[serde(default)]
    pub style: Option<AestheticType>,

    #[serde(default)]
    pub aspect_ratio: Option<AspectRatio>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateAllDishesValidator {
    #[serde(default)]
    pub style: Option<AestheticType>,

    #[serde(default)]
    pub aspect_ratio: Option<AspectRatio>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SetDishAspectRatioValidator {
    /// `null` clears the override so the studio default applies again.
    pub aspect_ratio: Option<AspectRatio>,
}
