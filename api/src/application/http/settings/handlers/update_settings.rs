use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::settings::handlers::get_settings::SettingsResponse;
use crate::application::http::settings::validators::UpdateSettingsValidator;
use axum::extract::State;
use lumina_core::domain::settings::{ports::StudioService, value_objects::UpdateSettingsInput};

#[utoipa::path(
    put,
    path = "",
    tag = "settings",
    summary = "Update studio settings",
    description = "Changes the selected aesthetic style and/or the default aspect ratio. Omitted fields are left unchanged.",
    responses(
        (status = 200, body = SettingsResponse),
        (status = 400, description = "Unknown style or aspect ratio")
    ),
    request_body = UpdateSettingsValidator
)]
pub async fn update_settings(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateSettingsValidator>,
) -> Result<Response<SettingsResponse>, ApiError> {
    let settings = state
        .service
        .update_settings(UpdateSettingsInput {
            selected_style: payload.selected_style,
            default_aspect_ratio: payload.default_aspect_ratio,
        })
        .await;

    Ok(Response::OK(SettingsResponse { data: settings }))
}
