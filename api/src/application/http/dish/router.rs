use super::handlers::clear_dishes::{__path_clear_dishes, clear_dishes};
use super::handlers::download_dish_image::{__path_download_dish_image, download_dish_image};
use super::handlers::generate_all_dishes::{__path_generate_all_dishes, generate_all_dishes};
use super::handlers::generate_dish_image::{__path_generate_dish_image, generate_dish_image};
use super::handlers::get_dish::{__path_get_dish, get_dish};
use super::handlers::get_dishes::{__path_get_dishes, get_dishes};
use super::handlers::set_dish_aspect_ratio::{__path_set_dish_aspect_ratio, set_dish_aspect_ratio};
use super::handlers::upload_dish_image::{MAX_IMAGE_SIZE, __path_upload_dish_image, upload_dish_image};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_dishes,
    clear_dishes,
    get_dish,
    generate_dish_image,
    generate_all_dishes,
    set_dish_aspect_ratio,
    upload_dish_image,
    download_dish_image
))]
pub struct DishApiDoc;

pub fn dish_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/dishes", state.args.server.root_path),
            get(get_dishes).delete(clear_dishes),
        )
        .route(
            &format!("{}/dishes/generate-all", state.args.server.root_path),
            post(generate_all_dishes),
        )
        .route(
            &format!("{}/dishes/{{dish_id}}", state.args.server.root_path),
            get(get_dish),
        )
        .route(
            &format!("{}/dishes/{{dish_id}}/generate", state.args.server.root_path),
            post(generate_dish_image),
        )
        .route(
            &format!(
                "{}/dishes/{{dish_id}}/aspect-ratio",
                state.args.server.root_path
            ),
            put(set_dish_aspect_ratio),
        )
        .route(
            &format!("{}/dishes/{{dish_id}}/image", state.args.server.root_path),
            get(download_dish_image)
                .post(upload_dish_image)
                .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE)),
        )
}
