use crate::application::http::dish::handlers::get_dish::DishResponse;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use lumina_core::domain::editor::ports::EditorService;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/edit-sessions/{session_id}/commit",
    tag = "editor",
    summary = "Save edits",
    description = "Writes the working image back into the dish and closes the session.",
    params(
        ("session_id" = Uuid, Path, description = "Edit session ID"),
    ),
    responses(
        (status = 200, body = DishResponse),
        (status = 404, description = "Edit session or dish not found")
    ),
)]
pub async fn commit_edit(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DishResponse>, ApiError> {
    let dish = state
        .service
        .commit_edit(session_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Dish no longer exists".to_string()))?;

    Ok(Response::OK(DishResponse { data: dish }))
}
