use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use lumina_core::domain::{aesthetic::AspectRatioOption, settings::ports::StudioService};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct GetAspectRatiosResponse {
    pub data: Vec<AspectRatioOption>,
}

#[utoipa::path(
    get,
    path = "/aspect-ratios",
    tag = "aesthetic",
    summary = "List aspect ratios",
    responses(
        (status = 200, body = GetAspectRatiosResponse)
    ),
)]
pub async fn get_aspect_ratios(
    State(state): State<AppState>,
) -> Response<GetAspectRatiosResponse> {
    Response::OK(GetAspectRatiosResponse {
        data: state.service.list_aspect_ratios(),
    })
}
