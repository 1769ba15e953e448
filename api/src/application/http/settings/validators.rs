use lumina_core::domain::aesthetic::{AestheticType, AspectRatio};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSettingsValidator {
    #[serde(default)]
    pub selected_style: Option<AestheticType>,

    #[serde(default)]
    pub default_aspect_ratio: Option<AspectRatio>,
}
