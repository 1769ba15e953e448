use crate::application::http::editor::handlers::get_edit_session::EditSessionResponse;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use lumina_core::domain::editor::ports::EditorService;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/dishes/{dish_id}/edit-sessions",
    tag = "editor",
    summary = "Open edit session",
    description = "Starts editing the current photo of a dish. Edits stay in the session until it is committed.",
    params(
        ("dish_id" = Uuid, Path, description = "Dish ID"),
    ),
    responses(
        (status = 201, body = EditSessionResponse),
        (status = 404, description = "Dish not found")
    ),
)]
pub async fn open_edit_session(
    Path(dish_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<EditSessionResponse>, ApiError> {
    let session = state
        .service
        .open_edit_session(dish_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(EditSessionResponse { data: session }))
}
