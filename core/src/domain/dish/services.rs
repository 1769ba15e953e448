use futures::future::join_all;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use crate::domain::{
    aesthetic::{AestheticType, AspectRatio},
    common::{entities::app_errors::CoreError, services::Service},
    dish::{
        entities::{BeginGeneration, Dish, DishUpdate},
        helpers::{decode_data_uri, download_file_name, encode_data_uri, image_mime_essence},
        ports::{DishRepository, DishService, GenerationClient},
        value_objects::{
            DishGenerationResult, DishGenerationStatus, DishImageDownload, GenerateAllInput,
            GenerateAllReport, GenerateDishImageInput, GenerationOutcome, ImageGenerationRequest,
            ParseMenuInput, SetDishAspectRatioInput, SkipReason, UploadDishImageInput,
        },
    },
    editor::ports::EditSessionRepository,
    notification::{entities::Notification, ports::NotificationRepository},
    settings::{entities::StudioSettings, ports::SettingsRepository},
};

pub const PARSE_FAILED_MESSAGE: &str =
    "Could not understand the menu. Please try again with clearer text.";

pub fn generation_failed_message(dish_name: &str) -> String {
    format!("Failed to generate image for {dish_name}")
}

/// Builds the generation request for a dish. The explicit aspect ratio wins over the dish
/// override, which wins over the studio default.
fn build_image_request(
    dish: &Dish,
    settings: StudioSettings,
    style: Option<AestheticType>,
    aspect_ratio: Option<AspectRatio>,
) -> ImageGenerationRequest {
    let style = style.unwrap_or(settings.selected_style);
    let aspect_ratio = aspect_ratio
        .or(dish.aspect_ratio)
        .unwrap_or(settings.default_aspect_ratio);

    ImageGenerationRequest {
        dish_name: dish.name.clone(),
        dish_description: dish.description.clone(),
        style_prompt: style.style().prompt_suffix.to_string(),
        aspect_ratio,
    }
}

impl<D, G, E, N, S> DishService for Service<D, G, E, N, S>
where
    D: DishRepository,
    G: GenerationClient,
    E: EditSessionRepository,
    N: NotificationRepository,
    S: SettingsRepository,
{
    #[instrument(skip(self, input), fields(text_len = input.text.len()))]
    async fn parse_menu(&self, input: ParseMenuInput) -> Result<Vec<Dish>, CoreError> {
        if input.text.trim().is_empty() {
            return Err(CoreError::InvalidInput("menu text is required".to_string()));
        }

        let _parsing = self.try_begin_parsing().ok_or_else(|| {
            debug!("Menu parse rejected, another parse is running");
            CoreError::Conflict("a menu is already being parsed".to_string())
        })?;

        let parsed = match self.generation_client.parse_menu(input.text).await {
            Ok(parsed) => parsed,
            Err(e) => {
                error!(error = %e, "Failed to parse menu");
                self.notification_repository
                    .push(Notification::error(PARSE_FAILED_MESSAGE))
                    .await;
                return Err(e);
            }
        };

        let dishes: Vec<Dish> = parsed
            .into_iter()
            .map(|item| Dish::new(item.name, item.description))
            .collect();

        self.dish_repository.replace_all(dishes.clone()).await;
        self.edit_session_repository.clear().await;

        info!(count = dishes.len(), "Menu parsed");

        Ok(dishes)
    }

    async fn list_dishes(&self) -> Vec<Dish> {
        self.dish_repository.list().await
    }

    async fn get_dish(&self, dish_id: Uuid) -> Result<Dish, CoreError> {
        self.dish_repository
            .get_by_id(dish_id)
            .await
            .ok_or(CoreError::NotFound)
    }

    async fn clear_dishes(&self) {
        self.dish_repository.clear().await;
        self.edit_session_repository.clear().await;

        info!("Dish store cleared");
    }

    #[instrument(skip(self), fields(dish_id = %input.dish_id))]
    async fn generate_dish_image(
        &self,
        input: GenerateDishImageInput,
    ) -> Result<GenerationOutcome, CoreError> {
        let settings = self.settings_repository.get().await;

        // The in-flight flag must be visible before the request exists.
        let dish = match self.dish_repository.begin_generation(input.dish_id).await {
            BeginGeneration::Started(dish) => dish,
            BeginGeneration::NotFound => {
                debug!("Dish not found, nothing to generate");
                return Ok(GenerationOutcome::Skipped {
                    reason: SkipReason::NotFound,
                });
            }
            BeginGeneration::AlreadyGenerating => {
                debug!("Dish already generating, ignoring request");
                return Ok(GenerationOutcome::Skipped {
                    reason: SkipReason::AlreadyGenerating,
                });
            }
        };

        let request = build_image_request(&dish, settings, input.style, input.aspect_ratio);

        info!(
            dish_name = %dish.name,
            aspect_ratio = %request.aspect_ratio,
            "Generating dish image"
        );

        match self.generation_client.generate_dish_image(request).await {
            Ok(image_url) => {
                match self
                    .dish_repository
                    .update_by_id(dish.id, DishUpdate::image_generated(image_url))
                    .await
                {
                    Some(dish) => {
                        info!(dish_name = %dish.name, "Dish image generated");
                        Ok(GenerationOutcome::Generated { dish })
                    }
                    None => {
                        debug!("Dish removed while generating, discarding image");
                        Ok(GenerationOutcome::Skipped {
                            reason: SkipReason::NotFound,
                        })
                    }
                }
            }
            Err(e) => {
                error!(error = %e, dish_name = %dish.name, "Failed to generate dish image");

                let still_present = self
                    .dish_repository
                    .update_by_id(dish.id, DishUpdate::generation_failed())
                    .await
                    .is_some();

                if still_present {
                    self.notification_repository
                        .push(Notification::dish_error(
                            dish.id,
                            generation_failed_message(&dish.name),
                        ))
                        .await;
                }

                Err(e)
            }
        }
    }

    async fn plan_generate_all(&self) -> Vec<Uuid> {
        self.dish_repository
            .list()
            .await
            .into_iter()
            .filter(Dish::needs_image)
            .map(|dish| dish.id)
            .collect()
    }

    #[instrument(skip(self, dish_ids), fields(count = dish_ids.len()))]
    async fn generate_dishes(
        &self,
        dish_ids: Vec<Uuid>,
        input: GenerateAllInput,
    ) -> GenerateAllReport {
        let input = &input;

        let results = join_all(dish_ids.into_iter().map(|dish_id| async move {
            let outcome = self
                .generate_dish_image(GenerateDishImageInput {
                    dish_id,
                    style: input.style,
                    aspect_ratio: input.aspect_ratio,
                })
                .await;

            let status = match outcome {
                Ok(GenerationOutcome::Generated { .. }) => DishGenerationStatus::Generated,
                Ok(GenerationOutcome::Skipped { reason }) => {
                    DishGenerationStatus::Skipped { reason }
                }
                Err(e) => DishGenerationStatus::Failed {
                    error: e.to_string(),
                },
            };

            DishGenerationResult { dish_id, status }
        }))
        .await;

        let report = GenerateAllReport { results };

        info!(
            generated = report.generated(),
            failed = report.failed(),
            "Batch generation settled"
        );

        report
    }

    async fn generate_all_missing(&self, input: GenerateAllInput) -> GenerateAllReport {
        let dish_ids = self.plan_generate_all().await;
        self.generate_dishes(dish_ids, input).await
    }

    #[instrument(skip(self, input), fields(dish_id = %input.dish_id, mime_type = %input.mime_type))]
    async fn upload_dish_image(
        &self,
        input: UploadDishImageInput,
    ) -> Result<Option<Dish>, CoreError> {
        let mime_type = image_mime_essence(&input.mime_type).ok_or_else(|| {
            CoreError::InvalidInput("uploaded file must be an image".to_string())
        })?;

        if input.data.is_empty() {
            return Err(CoreError::InvalidInput(
                "uploaded file cannot be empty".to_string(),
            ));
        }

        let image_url = encode_data_uri(&mime_type, &input.data);

        let dish = self
            .dish_repository
            .update_by_id(input.dish_id, DishUpdate::image_replaced(image_url))
            .await;

        match &dish {
            Some(dish) => info!(dish_name = %dish.name, "Dish image replaced by upload"),
            None => debug!("Dish not found, upload discarded"),
        }

        Ok(dish)
    }

    async fn download_dish_image(&self, dish_id: Uuid) -> Result<DishImageDownload, CoreError> {
        let dish = self.get_dish(dish_id).await?;
        let image_url = dish.image_url.as_deref().ok_or(CoreError::NotFound)?;

        let (mime_type, bytes) = decode_data_uri(image_url)?;

        Ok(DishImageDownload {
            file_name: download_file_name(&dish.name, &mime_type),
            mime_type,
            bytes,
        })
    }

    async fn set_dish_aspect_ratio(
        &self,
        input: SetDishAspectRatioInput,
    ) -> Result<Option<Dish>, CoreError> {
        Ok(self
            .dish_repository
            .update_by_id(input.dish_id, DishUpdate::aspect_ratio(input.aspect_ratio))
            .await)
    }
}
