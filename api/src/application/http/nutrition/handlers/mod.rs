pub mod calculate_imt;
pub mod chat_nutribot;
pub mod estimate_food_nutrition;
pub mod estimate_label_nutrition;
pub mod generate_meal_plan;
pub mod generate_nutrition_advisor;
pub mod generate_personal_plan;
