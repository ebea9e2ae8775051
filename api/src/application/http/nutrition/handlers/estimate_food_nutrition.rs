use axum::extract::{Multipart, State};
use eatitude_core::domain::{llm::entities::ImageData, nutrition::ports::NutritionService};
use serde_json::Value;
use tracing::{error, info};

use crate::application::http::{
    nutrition::{
        upload::{decode_base64_image, read_image_upload},
        validators::{Base64ImageRequest, ImageUploadForm},
    },
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
    path = "/generate_food_nutrition_estimation",
    tag = "food-scanner",
    summary = "Estimate nutrition from a food photo",
    description = "Identifies the food in the uploaded photo and estimates portion, calories and nutrients.",
    request_body(content = ImageUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Estimation as returned by the model"),
        (status = 400, description = "Missing or invalid image", body = ApiErrorResponse),
        (status = 413, description = "Image too large", body = ApiErrorResponse),
        (status = 500, description = "Model call failed", body = ApiErrorResponse)
    ),
)]
pub async fn estimate_food_nutrition(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response<Value>, ApiError> {
    let image = read_image_upload(multipart).await?;
    info!(size = image.bytes.len(), mime_type = %image.mime_type, "Food photo received");

    estimate(&state, image).await
}

#[utoipa::path(
    post,
    path = "/generate_food_nutrition_estimation_base64",
    tag = "food-scanner",
    summary = "Estimate nutrition from a base64 food photo",
    request_body = Base64ImageRequest,
    responses(
        (status = 200, description = "Estimation as returned by the model"),
        (status = 400, description = "Invalid base64 image", body = ApiErrorResponse),
        (status = 413, description = "Image too large", body = ApiErrorResponse),
        (status = 500, description = "Model call failed", body = ApiErrorResponse)
    ),
)]
pub async fn estimate_food_nutrition_base64(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<Base64ImageRequest>,
) -> Result<Response<Value>, ApiError> {
    let image = decode_base64_image(&payload.file)?;

    estimate(&state, image).await
}

async fn estimate(state: &AppState, image: ImageData) -> Result<Response<Value>, ApiError> {
    let estimation = state
        .service
        .estimate_food_nutrition(image)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to estimate food nutrition");
            ApiError::from(e).context("Failed to estimate food nutrition")
        })?;

    Ok(Response::OK(estimation))
}
