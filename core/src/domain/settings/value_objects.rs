use crate::domain::aesthetic::{AestheticType, AspectRatio};

#[derive(Debug, Clone, Default)]
pub struct UpdateSettingsInput {
    pub selected_style: Option<AestheticType>,
    pub default_aspect_ratio: Option<AspectRatio>,
}
