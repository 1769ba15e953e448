use crate::application::http::menu::validators::ParseMenuValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use lumina_core::domain::dish::{entities::Dish, ports::DishService, value_objects::ParseMenuInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ParseMenuResponse {
    pub data: Vec<Dish>,
}

#[utoipa::path(
    post,
    path = "/parse",
    tag = "menu",
    summary = "Parse menu text",
    description = "Extracts dishes from free-form menu text and replaces the current dish list with them.",
    responses(
        (status = 200, body = ParseMenuResponse),
        (status = 400, description = "Empty menu text"),
        (status = 409, description = "A menu is already being parsed"),
        (status = 502, description = "The generation service failed")
    ),
    request_body = ParseMenuValidator
)]
pub async fn parse_menu(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ParseMenuValidator>,
) -> Result<Response<ParseMenuResponse>, ApiError> {
    let dishes = state
        .service
        .parse_menu(ParseMenuInput { text: payload.text })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ParseMenuResponse { data: dishes }))
}
