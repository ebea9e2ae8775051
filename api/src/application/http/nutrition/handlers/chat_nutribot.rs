use axum::extract::State;
use eatitude_core::domain::nutrition::ports::NutritionService;
use tracing::error;

use crate::application::http::{
    nutrition::validators::{NutriBotChatRequest, NutriBotChatResponse},
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
    path = "/chat_nutribot",
    tag = "nutrition-advisor",
    summary = "Chat with NutriBot",
    description = "Continues a conversation with NutriBot, which answers with the user's profile, plans and progress in mind.",
    request_body = NutriBotChatRequest,
    responses(
        (status = 200, body = NutriBotChatResponse),
        (status = 400, description = "Conversation uses a reserved role", body = ApiErrorResponse),
        (status = 422, description = "Invalid request body", body = ApiErrorResponse),
        (status = 500, description = "Model call failed", body = ApiErrorResponse)
    ),
)]
pub async fn chat_nutribot(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<NutriBotChatRequest>,
) -> Result<Response<NutriBotChatResponse>, ApiError> {
    let reply = state
        .service
        .chat_with_nutribot(payload.into())
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to chat with NutriBot");
            ApiError::from(e).context("Failed to chat with NutriBot")
        })?;

    Ok(Response::OK(NutriBotChatResponse { reply }))
}
