use tracing::info;

use crate::domain::{
    aesthetic::{AESTHETICS, AestheticStyle, AspectRatio, AspectRatioOption},
    common::services::Service,
    dish::ports::{DishRepository, GenerationClient},
    editor::ports::EditSessionRepository,
    notification::{entities::Notification, ports::NotificationRepository},
    settings::{
        entities::StudioSettings,
        ports::{SettingsRepository, StudioService},
        value_objects::UpdateSettingsInput,
    },
};

impl<D, G, E, N, S> StudioService for Service<D, G, E, N, S>
where
    D: DishRepository,
    G: GenerationClient,
    E: EditSessionRepository,
    N: NotificationRepository,
    S: SettingsRepository,
{
    async fn get_settings(&self) -> StudioSettings {
        self.settings_repository.get().await
    }

    async fn update_settings(&self, input: UpdateSettingsInput) -> StudioSettings {
        let settings = self.settings_repository.update(input).await;

        info!(
            style = %settings.selected_style,
            aspect_ratio = %settings.default_aspect_ratio,
            "Studio settings updated"
        );

        settings
    }

    fn list_aesthetics(&self) -> Vec<AestheticStyle> {
        AESTHETICS.to_vec()
    }

    fn list_aspect_ratios(&self) -> Vec<AspectRatioOption> {
        AspectRatio::ALL.into_iter().map(AspectRatioOption::from).collect()
    }

    async fn list_notifications(&self, limit: usize) -> Vec<Notification> {
        self.notification_repository.recent(limit).await
    }
}
