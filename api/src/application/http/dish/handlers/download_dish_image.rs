use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
};
use lumina_core::domain::dish::ports::DishService;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/{dish_id}/image",
    tag = "dish",
    summary = "Download dish image",
    description = "Returns the current dish photo as an attachment named after the dish.",
    params(
        ("dish_id" = Uuid, Path, description = "Dish ID"),
    ),
    responses(
        (status = 200, description = "Image bytes", body = Vec<u8>, content_type = "application/octet-stream"),
        (status = 404, description = "Dish not found or has no image")
    ),
)]
pub async fn download_dish_image(
    Path(dish_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let download = state
        .service
        .download_dish_image(dish_id)
        .await
        .map_err(ApiError::from)?;

    Ok((
        [
            (CONTENT_TYPE, download.mime_type),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", download.file_name),
            ),
        ],
        download.bytes,
    ))
}
