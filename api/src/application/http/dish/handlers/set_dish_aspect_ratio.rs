use crate::application::http::dish::handlers::get_dish::DishResponse;
use crate::application::http::dish::validators::SetDishAspectRatioValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use lumina_core::domain::dish::{ports::DishService, value_objects::SetDishAspectRatioInput};
use uuid::Uuid;

#[utoipa::path(
    put,
    path = "/{dish_id}/aspect-ratio",
    tag = "dish",
    summary = "Set dish aspect ratio",
    description = "Overrides the aspect ratio used for this dish. `null` restores the studio default.",
    params(
        ("dish_id" = Uuid, Path, description = "Dish ID"),
    ),
    responses(
        (status = 200, body = DishResponse),
        (status = 404, description = "Dish not found")
    ),
    request_body = SetDishAspectRatioValidator
)]
pub async fn set_dish_aspect_ratio(
    Path(dish_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SetDishAspectRatioValidator>,
) -> Result<Response<DishResponse>, ApiError> {
    let dish = state
        .service
        .set_dish_aspect_ratio(SetDishAspectRatioInput {
            dish_id,
            aspect_ratio: payload.aspect_ratio,
        })
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Dish not found".to_string()))?;

    Ok(Response::OK(DishResponse { data: dish }))
}
