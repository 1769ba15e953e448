use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use lumina_core::domain::{notification::entities::Notification, settings::ports::StudioService};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

const DEFAULT_LIMIT: usize = 20;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NotificationQuery {
    /// Maximum number of notifications to return, newest first.
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetNotificationsResponse {
    pub data: Vec<Notification>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "notification",
    summary = "List notifications",
    description = "Returns the most recent workflow failures, newest first.",
    params(NotificationQuery),
    responses(
        (status = 200, body = GetNotificationsResponse)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    Query(query): Query<NotificationQuery>,
) -> Response<GetNotificationsResponse> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    Response::OK(GetNotificationsResponse {
        data: state.service.list_notifications(limit).await,
    })
}
