use axum::extract::State;
use eatitude_core::domain::nutrition::ports::NutritionService;
use serde_json::Value;
use tracing::error;

use crate::application::http::{
    nutrition::validators::MealPlanRequest,
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
    path = "/generate_meal_plan",
    tag = "meal-plan",
    summary = "Generate daily meal plan",
    description = "Builds a one-day Indonesian meal plan that fits the user's personal healthy eating plan.",
    request_body = MealPlanRequest,
    responses(
        (status = 200, description = "Meal plan as returned by the model"),
        (status = 422, description = "Invalid request body", body = ApiErrorResponse),
        (status = 500, description = "Model call failed", body = ApiErrorResponse)
    ),
)]
pub async fn generate_meal_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<MealPlanRequest>,
) -> Result<Response<Value>, ApiError> {
    let meal_plan = state
        .service
        .generate_meal_plan(payload.into())
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to generate meal plan");
            ApiError::from(e).context("Failed to generate meal plan")
        })?;

    Ok(Response::OK(meal_plan))
}
