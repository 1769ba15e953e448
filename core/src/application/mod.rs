use crate::{
    domain::{
        common::{LuminaConfig, services::Service},
        settings::entities::StudioSettings,
    },
    infrastructure::{
        dish::InMemoryDishRepository, editor::InMemoryEditSessionRepository,
        llm::GeminiGenerationClient, notification::InMemoryNotificationRepository,
        settings::InMemorySettingsRepository,
    },
};

pub type LuminaService = Service<
    InMemoryDishRepository,
    GeminiGenerationClient,
    InMemoryEditSessionRepository,
    InMemoryNotificationRepository,
    InMemorySettingsRepository,
>;

/// Builds the orchestrator with its process-lifetime adapters.
pub async fn create_service(config: LuminaConfig) -> Result<LuminaService, anyhow::Error> {
    let generation_client = GeminiGenerationClient::new(config.llm.clone())?;

    if config.llm.gemini_api_key.is_empty() {
        tracing::warn!("No Gemini API key configured, generation requests will be rejected");
    }

    let settings = StudioSettings {
        selected_style: config.studio.default_style,
        default_aspect_ratio: config.studio.default_aspect_ratio,
    };

    tracing::info!(
        text_model = %config.llm.text_model,
        image_model = %config.llm.image_model,
        edit_model = %config.llm.edit_model,
        "Generation service client ready"
    );

    Ok(Service::new(
        InMemoryDishRepository::new(),
        generation_client,
        InMemoryEditSessionRepository::new(),
        InMemoryNotificationRepository::new(config.studio.notification_capacity),
        InMemorySettingsRepository::new(settings),
    ))
}
