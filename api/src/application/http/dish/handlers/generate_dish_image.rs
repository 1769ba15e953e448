use crate::application::http::dish::validators::GenerateDishImageValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateOptionalJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use lumina_core::domain::dish::{
    ports::DishService,
    value_objects::{GenerateDishImageInput, GenerationOutcome},
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct GenerateDishImageResponse {
    pub data: GenerationOutcome,
}

#[utoipa::path(
    post,
    path = "/{dish_id}/generate",
    tag = "dish",
    summary = "Generate dish image",
    description = "Requests a new photo for one dish. Unknown dishes and dishes already generating are skipped without contacting the generation service.",
    params(
        ("dish_id" = Uuid, Path, description = "Dish ID"),
    ),
    responses(
        (status = 200, body = GenerateDishImageResponse),
        (status = 502, description = "The generation service failed")
    ),
    request_body(content = GenerateDishImageValidator, description = "Optional overrides, the body may be omitted")
)]
pub async fn generate_dish_image(
    Path(dish_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateOptionalJson(payload): ValidateOptionalJson<GenerateDishImageValidator>,
) -> Result<Response<GenerateDishImageResponse>, ApiError> {
    let outcome = state
        .service
        .generate_dish_image(GenerateDishImageInput {
            dish_id,
            style: payload.style,
            aspect_ratio: payload.aspect_ratio,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateDishImageResponse { data: outcome }))
}
