use axum::extract::State;
use eatitude_core::domain::nutrition::ports::NutritionService;
use serde_json::Value;
use tracing::error;

use crate::application::http::{
    nutrition::validators::UserDataValidator,
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
    path = "/generate_personal_plan",
    tag = "personal-plan",
    summary = "Generate personal healthy eating plan",
    description = "Builds a personal healthy eating plan (calories, macro and micronutrients, consumption limits, fluids) from the user's profile.",
    request_body = UserDataValidator,
    responses(
        (status = 200, description = "Plan as returned by the model, or {\"raw_response\": ...} when it was not valid JSON"),
        (status = 422, description = "Invalid user data", body = ApiErrorResponse),
        (status = 500, description = "Model call failed", body = ApiErrorResponse)
    ),
)]
pub async fn generate_personal_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UserDataValidator>,
) -> Result<Response<Value>, ApiError> {
    let plan = state
        .service
        .generate_personal_plan(payload.into())
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to generate personal plan");
            ApiError::from(e).context("Failed to generate personal plan")
        })?;

    Ok(Response::OK(plan))
}
