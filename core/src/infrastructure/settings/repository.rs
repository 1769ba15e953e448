use tokio::sync::RwLock;

use crate::domain::settings::{
    entities::StudioSettings, ports::SettingsRepository, value_objects::UpdateSettingsInput,
};

#[derive(Debug, Default)]
pub struct InMemorySettingsRepository {
    settings: RwLock<StudioSettings>,
}

impl InMemorySettingsRepository {
    pub fn new(initial: StudioSettings) -> Self {
        Self {
            settings: RwLock::new(initial),
        }
    }
}

impl SettingsRepository for InMemorySettingsRepository {
    async fn get(&self) -> StudioSettings {
        *self.settings.read().await
    }

    async fn update(&self, input: UpdateSettingsInput) -> StudioSettings {
        let mut settings = self.settings.write().await;

        if let Some(style) = input.selected_style {
            settings.selected_style = style;
        }
        if let Some(aspect_ratio) = input.default_aspect_ratio {
            settings.default_aspect_ratio = aspect_ratio;
        }

        *settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aesthetic::{AestheticType, AspectRatio};

    #[tokio::test]
    async fn partial_update_keeps_other_fields() {
        let repository = InMemorySettingsRepository::default();

        let settings = repository
            .update(UpdateSettingsInput {
                selected_style: Some(AestheticType::Social),
                default_aspect_ratio: None,
            })
            .await;

        assert_eq!(settings.selected_style, AestheticType::Social);
        assert_eq!(settings.default_aspect_ratio, AspectRatio::Landscape);
    }
}
