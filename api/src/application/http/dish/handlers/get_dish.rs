use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use lumina_core::domain::dish::{entities::Dish, ports::DishService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DishResponse {
    pub data: Dish,
}

#[utoipa::path(
    get,
    path = "/{dish_id}",
    tag = "dish",
    summary = "Get dish",
    params(
        ("dish_id" = Uuid, Path, description = "Dish ID"),
    ),
    responses(
        (status = 200, body = DishResponse),
        (status = 404, description = "Dish not found")
    ),
)]
pub async fn get_dish(
    Path(dish_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DishResponse>, ApiError> {
    let dish = state
        .service
        .get_dish(dish_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DishResponse { data: dish }))
}
