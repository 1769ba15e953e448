use crate::application::http::dish::validators::GenerateAllDishesValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateOptionalJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response as AxumResponse};
use lumina_core::domain::dish::{
    ports::DishService,
    value_objects::{GenerateAllInput, GenerateAllReport},
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GenerateAllQuery {
    /// Wait for every generation to settle and return the per-dish report.
    #[serde(default)]
    pub wait: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateAllScheduled {
    pub dish_ids: Vec<Uuid>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateAllAcceptedResponse {
    pub data: GenerateAllScheduled,
}

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct GenerateAllReportResponse {
    pub data: GenerateAllReport,
}

#[utoipa::path(
    post,
    path = "/generate-all",
    tag = "dish",
    summary = "Generate all missing images",
    description = "Starts one generation for every dish without an image that is not already generating. Requests run concurrently and each dish settles on its own.",
    params(GenerateAllQuery),
    responses(
        (status = 202, body = GenerateAllAcceptedResponse),
        (status = 200, description = "Report when `wait=true`", body = GenerateAllReportResponse)
    ),
    request_body(content = GenerateAllDishesValidator, description = "Optional overrides, the body may be omitted")
)]
pub async fn generate_all_dishes(
    State(state): State<AppState>,
    Query(query): Query<GenerateAllQuery>,
    ValidateOptionalJson(payload): ValidateOptionalJson<GenerateAllDishesValidator>,
) -> Result<AxumResponse, ApiError> {
    let input = GenerateAllInput {
        style: payload.style,
        aspect_ratio: payload.aspect_ratio,
    };

    let dish_ids = state.service.plan_generate_all().await;

    if query.wait {
        let report = state.service.generate_dishes(dish_ids, input).await;
        return Ok(Response::OK(GenerateAllReportResponse { data: report }).into_response());
    }

    info!(count = dish_ids.len(), "Scheduling batch generation");

    let service = state.service.clone();
    let scheduled = dish_ids.clone();
    tokio::spawn(async move {
        service.generate_dishes(scheduled, input).await;
    });

    Ok(Response::Accepted(GenerateAllAcceptedResponse {
        data: GenerateAllScheduled { dish_ids },
    })
    .into_response())
}
