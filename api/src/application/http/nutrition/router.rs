use super::handlers::{
    calculate_imt::{__path_calculate_imt, calculate_imt},
    chat_nutribot::{__path_chat_nutribot, chat_nutribot},
    estimate_food_nutrition::{
        __path_estimate_food_nutrition, __path_estimate_food_nutrition_base64,
        estimate_food_nutrition, estimate_food_nutrition_base64,
    },
    estimate_label_nutrition::{
        __path_estimate_label_nutrition, __path_estimate_label_nutrition_base64,
        estimate_label_nutrition, estimate_label_nutrition_base64,
    },
    generate_meal_plan::{__path_generate_meal_plan, generate_meal_plan},
    generate_nutrition_advisor::{__path_generate_nutrition_advisor, generate_nutrition_advisor},
    generate_personal_plan::{__path_generate_personal_plan, generate_personal_plan},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    generate_personal_plan,
    generate_meal_plan,
    estimate_food_nutrition,
    estimate_food_nutrition_base64,
    estimate_label_nutrition,
    estimate_label_nutrition_base64,
    generate_nutrition_advisor,
    chat_nutribot,
    calculate_imt
))]
pub struct NutritionApiDoc;

pub fn nutrition_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/generate_personal_plan", state.args.server.root_path),
            post(generate_personal_plan),
        )
        .route(
            &format!("{}/generate_meal_plan", state.args.server.root_path),
            post(generate_meal_plan),
        )
        .route(
            &format!(
                "{}/generate_food_nutrition_estimation",
                state.args.server.root_path
            ),
            post(estimate_food_nutrition),
        )
        .route(
            &format!(
                "{}/generate_food_nutrition_estimation_base64",
                state.args.server.root_path
            ),
            post(estimate_food_nutrition_base64),
        )
        .route(
            &format!(
                "{}/generate_label_informasi_gizi_nutrition_estimation",
                state.args.server.root_path
            ),
            post(estimate_label_nutrition),
        )
        .route(
            &format!(
                "{}/generate_label_informasi_gizi_nutrition_estimation_base64",
                state.args.server.root_path
            ),
            post(estimate_label_nutrition_base64),
        )
        .route(
            &format!("{}/generate_nutrition_advisor", state.args.server.root_path),
            post(generate_nutrition_advisor),
        )
        .route(
            &format!("{}/chat_nutribot", state.args.server.root_path),
            post(chat_nutribot),
        )
        .route(
            &format!("{}/calculate_imt", state.args.server.root_path),
            post(calculate_imt),
        )
}
