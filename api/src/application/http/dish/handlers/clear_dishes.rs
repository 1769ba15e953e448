use crate::application::http::server::app_state::AppState;
use axum::{extract::State, http::StatusCode};
use lumina_core::domain::dish::ports::DishService;

#[utoipa::path(
    delete,
    path = "",
    tag = "dish",
    summary = "Clear dishes",
    description = "Removes every dish and closes any open edit session.",
    responses(
        (status = 204, description = "Dish list cleared")
    ),
)]
pub async fn clear_dishes(State(state): State<AppState>) -> StatusCode {
    state.service.clear_dishes().await;

    StatusCode::NO_CONTENT
}
