use axum::extract::{Multipart, Path, State};
use lumina_core::domain::dish::{ports::DishService, value_objects::UploadDishImageInput};
use tracing::{error, warn};
use uuid::Uuid;

use crate::application::http::{
    dish::handlers::get_dish::DishResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

pub const MAX_IMAGE_SIZE: usize = 20 * 1024 * 1024;

#[utoipa::path(
    post,
    path = "/{dish_id}/image",
    tag = "dish",
    summary = "Upload dish image",
    description = "Replaces the dish photo with an uploaded image via multipart form data (field `file`). The generation service is not contacted.",
    params(
        ("dish_id" = Uuid, Path, description = "Dish ID"),
    ),
    responses(
        (status = 200, description = "Image replaced", body = DishResponse),
        (status = 400, description = "Missing, empty or non-image file"),
        (status = 404, description = "Dish not found"),
        (status = 413, description = "File too large")
    ),
)]
pub async fn upload_dish_image(
    Path(dish_id): Path<Uuid>,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<DishResponse>, ApiError> {
    let mut upload: Option<(String, bytes::Bytes)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let mime_type = field
            .content_type()
            .map(str::to_string)
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let data = field.bytes().await.map_err(|e| {
            error!("Failed to read file bytes: {}", e);
            ApiError::BadRequest(format!("Failed to read file: {}", e))
        })?;

        if data.is_empty() {
            warn!(%dish_id, "Empty image upload attempted");
            return Err(ApiError::BadRequest("File cannot be empty".to_string()));
        }

        upload = Some((mime_type, data));
    }

    let (mime_type, data) = upload.ok_or_else(|| {
        ApiError::BadRequest("Missing 'file' field in multipart form".to_string())
    })?;

    let dish = state
        .service
        .upload_dish_image(UploadDishImageInput {
            dish_id,
            mime_type,
            data,
        })
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Dish not found".to_string()))?;

    Ok(Response::OK(DishResponse { data: dish }))
}
