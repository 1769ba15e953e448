use crate::application::http::editor::handlers::get_edit_session::EditSessionResponse;
use crate::application::http::editor::validators::ApplyEditValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use lumina_core::domain::editor::{ports::EditorService, value_objects::ApplyEditInput};
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/edit-sessions/{session_id}/edits",
    tag = "editor",
    summary = "Apply edit",
    description = "Sends the working image and the instruction to the generation service. On failure the working image is kept and the session records the error.",
    params(
        ("session_id" = Uuid, Path, description = "Edit session ID"),
    ),
    responses(
        (status = 200, body = EditSessionResponse),
        (status = 400, description = "Blank instruction or nothing to edit"),
        (status = 404, description = "Edit session not found"),
        (status = 409, description = "An edit is already running on this session"),
        (status = 502, description = "The generation service failed")
    ),
    request_body = ApplyEditValidator
)]
pub async fn apply_edit(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ApplyEditValidator>,
) -> Result<Response<EditSessionResponse>, ApiError> {
    let session = state
        .service
        .apply_edit(ApplyEditInput {
            session_id,
            instruction: payload.instruction,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(EditSessionResponse { data: session }))
}
