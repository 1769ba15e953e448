use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use lumina_core::domain::settings::{entities::StudioSettings, ports::StudioService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SettingsResponse {
    pub data: StudioSettings,
}

#[utoipa::path(
    get,
    path = "",
    tag = "settings",
    summary = "Get studio settings",
    description = "Returns the selected aesthetic style and the default aspect ratio.",
    responses(
        (status = 200, body = SettingsResponse)
    ),
)]
pub async fn get_settings(State(state): State<AppState>) -> Response<SettingsResponse> {
    Response::OK(SettingsResponse {
        data: state.service.get_settings().await,
    })
}
