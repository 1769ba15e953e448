use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use lumina_core::domain::editor::ports::EditorService;
use uuid::Uuid;

#[utoipa::path(
    delete,
    path = "/edit-sessions/{session_id}",
    tag = "editor",
    summary = "Close edit session",
    description = "Discards the session without touching the dish.",
    params(
        ("session_id" = Uuid, Path, description = "Edit session ID"),
    ),
    responses(
        (status = 204, description = "Session closed"),
        (status = 404, description = "Edit session not found")
    ),
)]
pub async fn close_edit_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .close_edit_session(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
