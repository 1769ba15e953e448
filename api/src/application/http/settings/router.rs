use super::handlers::get_settings::{__path_get_settings, get_settings};
use super::handlers::update_settings::{__path_update_settings, update_settings};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_settings, update_settings))]
pub struct SettingsApiDoc;

pub fn settings_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/settings", state.args.server.root_path),
        get(get_settings).put(update_settings),
    )
}
