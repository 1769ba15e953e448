use crate::application::http::editor::handlers::get_edit_session::EditSessionResponse;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use lumina_core::domain::editor::ports::EditorService;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/edit-sessions/{session_id}/revert",
    tag = "editor",
    summary = "Revert edits",
    description = "Restores the image the session was opened with.",
    params(
        ("session_id" = Uuid, Path, description = "Edit session ID"),
    ),
    responses(
        (status = 200, body = EditSessionResponse),
        (status = 404, description = "Edit session not found")
    ),
)]
pub async fn revert_edit(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<EditSessionResponse>, ApiError> {
    let session = state
        .service
        .revert_edit(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(EditSessionResponse { data: session }))
}
