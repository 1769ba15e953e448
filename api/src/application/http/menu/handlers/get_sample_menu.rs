use crate::application::http::server::api_entities::response::Response;
use lumina_core::domain::dish::sample::SAMPLE_MENU;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SampleMenu {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SampleMenuResponse {
    pub data: SampleMenu,
}

#[utoipa::path(
    get,
    path = "/sample",
    tag = "menu",
    summary = "Get sample menu",
    description = "Returns a ready-made menu text that can be submitted to the parse endpoint as is.",
    responses(
        (status = 200, body = SampleMenuResponse)
    )
)]
pub async fn get_sample_menu() -> Response<SampleMenuResponse> {
    Response::OK(SampleMenuResponse {
        data: SampleMenu {
            text: SAMPLE_MENU.to_string(),
        },
    })
}
