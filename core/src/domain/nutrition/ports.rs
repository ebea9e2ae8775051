use std::future::Future;

use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError,
    llm::entities::ImageData,
    nutrition::{
        entities::{Bmi, UserProfile},
        value_objects::{MealPlanInput, NutriBotChatInput, NutritionContext},
    },
};

/// Service trait for the nutrition pipelines. Every generating operation
/// returns the reshaped model reply, see
/// [`extract_json_response`](crate::domain::nutrition::parser::extract_json_response).
#[cfg_attr(test, mockall::automock)]
pub trait NutritionService: Send + Sync {
    fn generate_personal_plan(
        &self,
        profile: UserProfile,
    ) -> impl Future<Output = Result<Value, CoreError>> + Send;

    fn generate_meal_plan(
        &self,
        input: MealPlanInput,
    ) -> impl Future<Output = Result<Value, CoreError>> + Send;

    fn estimate_food_nutrition(
        &self,
        image: ImageData,
    ) -> impl Future<Output = Result<Value, CoreError>> + Send;

    fn estimate_label_nutrition(
        &self,
        image: ImageData,
    ) -> impl Future<Output = Result<Value, CoreError>> + Send;

    fn generate_nutrition_advice(
        &self,
        context: NutritionContext,
    ) -> impl Future<Output = Result<Value, CoreError>> + Send;

    /// Returns NutriBot's reply text for the conversation so far.
    fn chat_with_nutribot(
        &self,
        input: NutriBotChatInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn calculate_bmi(&self, weight_kg: f64, height_cm: f64) -> Result<Bmi, CoreError>;
}
