use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::aesthetic::{AestheticType, AspectRatio};

/// Context-wide choices applied when a generate request does not say otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StudioSettings {
    pub selected_style: AestheticType,
    pub default_aspect_ratio: AspectRatio,
}
