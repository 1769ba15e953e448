use super::handlers::get_aesthetics::{__path_get_aesthetics, get_aesthetics};
use super::handlers::get_aspect_ratios::{__path_get_aspect_ratios, get_aspect_ratios};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_aesthetics, get_aspect_ratios))]
pub struct AestheticApiDoc;

pub fn aesthetic_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/aesthetics", state.args.server.root_path),
            get(get_aesthetics),
        )
        .route(
            &format!("{}/aspect-ratios", state.args.server.root_path),
            get(get_aspect_ratios),
        )
}
