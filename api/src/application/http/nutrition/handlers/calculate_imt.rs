use axum::extract::State;
use eatitude_core::domain::nutrition::{entities::Bmi, ports::NutritionService};

use crate::application::http::{
    nutrition::validators::CalculateImtRequest,
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
    path = "/calculate_imt",
    tag = "personal-plan",
    summary = "Calculate body-mass index",
    description = "Computes IMT from weight (kg) and height (cm) and classifies it as Kurus, Normal, Gemuk or Obesitas. Does not call the model.",
    request_body = CalculateImtRequest,
    responses(
        (status = 200, body = Bmi),
        (status = 422, description = "Invalid measurements", body = ApiErrorResponse)
    ),
)]
pub async fn calculate_imt(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CalculateImtRequest>,
) -> Result<Response<Bmi>, ApiError> {
    let bmi = state
        .service
        .calculate_bmi(payload.berat_badan, payload.tinggi_badan)
        .map_err(ApiError::from)?;

    Ok(Response::OK(bmi))
}
