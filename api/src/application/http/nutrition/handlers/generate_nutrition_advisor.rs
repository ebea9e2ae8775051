use axum::extract::State;
use eatitude_core::domain::nutrition::ports::NutritionService;
use serde_json::Value;
use tracing::error;

use crate::application::http::{
    nutrition::validators::NutritionAdvisorRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/generate_nutrition_advisor",
    tag = "nutrition-advisor",
    summary = "Generate nutrition advice",
    description = "Returns insight, recommendation, reminder and alert based on the user's plans and daily progress.",
    request_body = NutritionAdvisorRequest,
    responses(
        (status = 200, description = "Advice as returned by the model"),
        (status = 422, description = "Invalid request body", body = ApiErrorResponse),
        (status = 500, description = "Model call failed", body = ApiErrorResponse)
    ),
)]
pub async fn generate_nutrition_advisor(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<NutritionAdvisorRequest>,
) -> Result<Response<Value>, ApiError> {
    let advice = state
        .service
        .generate_nutrition_advice(payload.into())
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to generate nutrition advice");
            ApiError::from(e).context("Failed to generate nutrition advice")
        })?;

    Ok(Response::OK(advice))
}
