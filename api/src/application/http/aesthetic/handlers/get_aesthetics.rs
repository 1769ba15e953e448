use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use lumina_core::domain::{aesthetic::AestheticStyle, settings::ports::StudioService};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct GetAestheticsResponse {
    pub data: Vec<AestheticStyle>,
}

#[utoipa::path(
    get,
    path = "/aesthetics",
    tag = "aesthetic",
    summary = "List aesthetic styles",
    description = "Returns the photography styles a dish image can be generated in.",
    responses(
        (status = 200, body = GetAestheticsResponse)
    ),
)]
pub async fn get_aesthetics(State(state): State<AppState>) -> Response<GetAestheticsResponse> {
    Response::OK(GetAestheticsResponse {
        data: state.service.list_aesthetics(),
    })
}
