use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use lumina_core::domain::dish::{entities::Dish, ports::DishService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDishesResponse {
    pub data: Vec<Dish>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "dish",
    summary = "List dishes",
    description = "Returns the dishes of the last parsed menu in menu order.",
    responses(
        (status = 200, body = GetDishesResponse)
    ),
)]
pub async fn get_dishes(State(state): State<AppState>) -> Response<GetDishesResponse> {
    Response::OK(GetDishesResponse {
        data: state.service.list_dishes().await,
    })
}
