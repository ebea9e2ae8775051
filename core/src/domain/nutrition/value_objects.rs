use serde_json::{Map, Value};

use crate::domain::llm::entities::ChatMessage;

/// Free-form JSON object as produced by earlier pipeline steps or the client.
pub type JsonObject = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct MealPlanInput {
    pub user_data: JsonObject,
    pub personal_plan: JsonObject,
}

/// Everything the advisor and NutriBot know about the user.
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionContext {
    pub user_data: JsonObject,
    pub personal_plan: JsonObject,
    pub meal_plan: JsonObject,
    pub user_progress: JsonObject,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NutriBotChatInput {
    pub context: NutritionContext,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanKind {
    FoodPhoto,
    NutritionLabel,
}

impl ScanKind {
    pub fn as_str(&self) -> &str {
        match self {
            ScanKind::FoodPhoto => "food_photo",
            ScanKind::NutritionLabel => "nutrition_label",
        }
    }
}
