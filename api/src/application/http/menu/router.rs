use super::handlers::{
    get_sample_menu::{__path_get_sample_menu, get_sample_menu},
    parse_menu::{__path_parse_menu, parse_menu},
};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(parse_menu, get_sample_menu))]
pub struct MenuApiDoc;

pub fn menu_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/menu/parse", state.args.server.root_path),
            post(parse_menu),
        )
        .route(
            &format!("{}/menu/sample", state.args.server.root_path),
            get(get_sample_menu),
        )
}
