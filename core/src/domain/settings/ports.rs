use crate::domain::{
    aesthetic::{AestheticStyle, AspectRatioOption},
    notification::entities::Notification,
    settings::{entities::StudioSettings, value_objects::UpdateSettingsInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait SettingsRepository: Send + Sync + 'static {
    fn get(&self) -> impl Future<Output = StudioSettings> + Send;

    fn update(&self, input: UpdateSettingsInput) -> impl Future<Output = StudioSettings> + Send;
}

/// Service trait for studio-wide state: presets, selections and the notification feed
#[cfg_attr(test, mockall::automock)]
pub trait StudioService: Send + Sync {
    fn get_settings(&self) -> impl Future<Output = StudioSettings> + Send;

    fn update_settings(
        &self,
        input: UpdateSettingsInput,
    ) -> impl Future<Output = StudioSettings> + Send;

    fn list_aesthetics(&self) -> Vec<AestheticStyle>;

    fn list_aspect_ratios(&self) -> Vec<AspectRatioOption>;

    fn list_notifications(&self, limit: usize) -> impl Future<Output = Vec<Notification>> + Send;
}
