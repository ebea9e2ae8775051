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
    path = "/generate_label_informasi_gizi_nutrition_estimation",
    tag = "food-scanner",
    summary = "Read a nutrition facts label",
    description = "Reads the product name and nutrition facts from a photo of a packaged food label.",
    request_body(content = ImageUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Label reading as returned by the model"),
        (status = 400, description = "Missing or invalid image", body = ApiErrorResponse),
        (status = 413, description = "Image too large", body = ApiErrorResponse),
        (status = 500, description = "Model call failed", body = ApiErrorResponse)
    ),
)]
pub async fn estimate_label_nutrition(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response<Value>, ApiError> {
    let image = read_image_upload(multipart).await?;
    info!(size = image.bytes.len(), mime_type = %image.mime_type, "Label photo received");

    read_label(&state, image).await
}

#[utoipa::path(
    post,
    path = "/generate_label_informasi_gizi_nutrition_estimation_base64",
    tag = "food-scanner",
    summary = "Read a base64 nutrition facts label",
    request_body = Base64ImageRequest,
    responses(
        (status = 200, description = "Label reading as returned by the model"),
        (status = 400, description = "Invalid base64 image", body = ApiErrorResponse),
        (status = 413, description = "Image too large", body = ApiErrorResponse),
        (status = 500, description = "Model call failed", body = ApiErrorResponse)
    ),
)]
pub async fn estimate_label_nutrition_base64(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<Base64ImageRequest>,
) -> Result<Response<Value>, ApiError> {
    let image = decode_base64_image(&payload.file)?;

    read_label(&state, image).await
}

async fn read_label(state: &AppState, image: ImageData) -> Result<Response<Value>, ApiError> {
    let reading = state
        .service
        .estimate_label_nutrition(image)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to estimate label nutrition");
            ApiError::from(e).context("Failed to estimate label nutrition")
        })?;

    Ok(Response::OK(reading))
}
