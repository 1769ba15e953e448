use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use lumina_core::domain::editor::{entities::EditSession, ports::EditorService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct EditSessionResponse {
    pub data: EditSession,
}

#[utoipa::path(
    get,
    path = "/edit-sessions/{session_id}",
    tag = "editor",
    summary = "Get edit session",
    params(
        ("session_id" = Uuid, Path, description = "Edit session ID"),
    ),
    responses(
        (status = 200, body = EditSessionResponse),
        (status = 404, description = "Edit session not found")
    ),
)]
pub async fn get_edit_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<EditSessionResponse>, ApiError> {
    let session = state
        .service
        .get_edit_session(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(EditSessionResponse { data: session }))
}
