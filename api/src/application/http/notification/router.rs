use super::handlers::get_notifications::{__path_get_notifications, get_notifications};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_notifications))]
pub struct NotificationApiDoc;

pub fn notification_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/notifications", state.args.server.root_path),
        get(get_notifications),
    )
}
