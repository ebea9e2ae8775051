use utoipa::OpenApi;

use crate::application::http::{
    health::HealthApiDoc, nutrition::router::NutritionApiDoc,
    server::api_entities::api_error::ApiErrorResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Eatitude Nutrition API",
        description = "Personalized nutrition, meal planning, and food analysis backed by a hosted LLM."
    ),
    components(schemas(ApiErrorResponse))
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Full document: the base info plus every feature's paths.
    pub fn build() -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();
        openapi.merge(HealthApiDoc::openapi());
        openapi.merge(NutritionApiDoc::openapi());
        openapi
    }
}
