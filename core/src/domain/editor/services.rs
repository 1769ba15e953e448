use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    dish::{
        entities::{Dish, DishUpdate},
        ports::{DishRepository, GenerationClient},
    },
    editor::{
        entities::{BeginEdit, EDIT_FAILED_MESSAGE, EditSession, EditSessionUpdate},
        ports::{EditSessionRepository, EditorService},
        value_objects::ApplyEditInput,
    },
    notification::ports::NotificationRepository,
    settings::ports::SettingsRepository,
};

impl<D, G, E, N, S> EditorService for Service<D, G, E, N, S>
where
    D: DishRepository,
    G: GenerationClient,
    E: EditSessionRepository,
    N: NotificationRepository,
    S: SettingsRepository,
{
    #[instrument(skip(self))]
    async fn open_edit_session(&self, dish_id: Uuid) -> Result<EditSession, CoreError> {
        let dish = self
            .dish_repository
            .get_by_id(dish_id)
            .await
            .ok_or(CoreError::NotFound)?;

        let session = self
            .edit_session_repository
            .insert(EditSession::open(dish.id, dish.image_url))
            .await;

        info!(session_id = %session.id, dish_name = %dish.name, "Edit session opened");

        Ok(session)
    }

    async fn get_edit_session(&self, session_id: Uuid) -> Result<EditSession, CoreError> {
        self.edit_session_repository
            .get(session_id)
            .await
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, input), fields(session_id = %input.session_id))]
    async fn apply_edit(&self, input: ApplyEditInput) -> Result<EditSession, CoreError> {
        let instruction = input.instruction.trim();
        if instruction.is_empty() {
            return Err(CoreError::InvalidInput(
                "edit instruction is required".to_string(),
            ));
        }

        let session = match self.edit_session_repository.begin_edit(input.session_id).await {
            BeginEdit::Started(session) => session,
            BeginEdit::NotFound => return Err(CoreError::NotFound),
            BeginEdit::AlreadyEditing => {
                debug!("Edit rejected, another edit is running on this session");
                return Err(CoreError::Conflict(
                    "an edit is already running on this session".to_string(),
                ));
            }
        };

        let Some(working_image) = session.working_image.filter(|image| !image.is_empty()) else {
            self.edit_session_repository
                .update(input.session_id, EditSessionUpdate::idle())
                .await;
            return Err(CoreError::InvalidInput(
                "there is no image to edit".to_string(),
            ));
        };

        match self
            .generation_client
            .edit_dish_image(working_image, instruction.to_string())
            .await
        {
            Ok(edited) => {
                let session = self
                    .edit_session_repository
                    .update(input.session_id, EditSessionUpdate::edited(edited))
                    .await
                    .ok_or_else(|| {
                        debug!("Edit session closed while editing, discarding result");
                        CoreError::NotFound
                    })?;

                info!("Edit applied");

                Ok(session)
            }
            Err(e) => {
                error!(error = %e, "Failed to edit dish image");

                self.edit_session_repository
                    .update(input.session_id, EditSessionUpdate::failed(EDIT_FAILED_MESSAGE))
                    .await;

                Err(e)
            }
        }
    }

    async fn revert_edit(&self, session_id: Uuid) -> Result<EditSession, CoreError> {
        let session = self.get_edit_session(session_id).await?;

        if !session.can_revert() {
            return Ok(session);
        }

        self.edit_session_repository
            .update(
                session_id,
                EditSessionUpdate {
                    working_image: session.original_image.clone(),
                    last_error: Some(None),
                    ..EditSessionUpdate::default()
                },
            )
            .await
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self))]
    async fn commit_edit(&self, session_id: Uuid) -> Result<Option<Dish>, CoreError> {
        let session = self
            .edit_session_repository
            .remove(session_id)
            .await
            .ok_or(CoreError::NotFound)?;

        let dish = match session.working_image {
            Some(image) => {
                self.dish_repository
                    .update_by_id(session.dish_id, DishUpdate::image_replaced(image))
                    .await
            }
            None => self.dish_repository.get_by_id(session.dish_id).await,
        };

        match &dish {
            Some(dish) => info!(dish_name = %dish.name, "Edit session committed"),
            None => debug!("Dish removed before commit, edit discarded"),
        }

        Ok(dish)
    }

    async fn close_edit_session(&self, session_id: Uuid) -> Result<(), CoreError> {
        self.edit_session_repository
            .remove(session_id)
            .await
            .ok_or(CoreError::NotFound)?;

        debug!(%session_id, "Edit session closed without saving");

        Ok(())
    }
}
