//! Prompt templates sent verbatim to the hosted model.
//!
//! Each template is four blocks separated by a blank line: the system
//! instructions, the interpolated input, the target JSON skeleton and the
//! formatting rules.

use serde_json::Value;

use crate::domain::nutrition::{
    schema::{
        food_scan_skeleton, meal_plan_skeleton, nutrition_advisor_skeleton,
        personal_plan_skeleton,
    },
    value_objects::{JsonObject, NutritionContext},
};

pub const JSON_ONLY_RULE: &str = "0. Respond only with the JSON output, no extra text.";

const PERSONAL_PLAN_SYSTEM: &str = "\
You are a nutritionist AI assistant. Using the following user data in JSON format,
create a complete personal healthy eating plan in JSON format.
Fill in all numeric fields based on the user's profile, activity level, and health goals.
The output must strictly follow the JSON structure provided below.";

const PERSONAL_PLAN_RULES: &str = "\
Rules:
0. Respond only with the JSON output, no extra text.
1. Calculate caloric needs based on user's weight, height, age, gender, activity level, and health goals.
2. Estimate macronutrients (carbs, protein, fat, fiber) based on the caloric needs.
3. Include recommended daily intake of vitamins and minerals appropriate for the user's age and gender.
4. Suggest limits for sugar, salt, and caffeine.
5. Calculate fluid intake (liters and glasses) based on weight and activity level.
6. Fill in all numeric fields realistically.
7. Keep the JSON strictly valid, with no extra text outside JSON.
8. Use Indonesian language for all keys and values.";

const MEAL_PLAN_SYSTEM: &str = "\
You are a nutrition assistant AI.
Based on the following user profile and nutritional requirements, generate a healthy daily meal plan (meal_plan_per_day) in JSON format.
Make sure the meal plan fits the user's calorie and macronutrient targets, food preferences, and lifestyle.
The plan should be practical and culturally relevant for Indonesia.";

const MEAL_PLAN_RULES: &str = "\
Rules:
0. Respond only with the JSON output, no extra text.
1. Adjust menus based on Indonesian food culture and lifestyle.
    - Use common Indonesian meals (e.g., nasi, tempe, tahu, ikan, sayur, buah tropis).
    - Avoid meals that are uncommon or impractical in Indonesia.
    - Keep cooking styles familiar: tumis, rebus, bakar, kukus, sop, sayur bening.
    - Drinks should emphasize air putih (plain water) and minimize soft drinks.
2. Ensure balance between protein (ikan, ayam, telur, tahu, tempe), carbs (nasi merah, nasi putih, singkong, ubi, jagung), and vegetables/fruits (tropical fruits like pisang, pepaya, mangga, semangka).
3. Make snacks simple and light (buah potong, kacang rebus, yogurt, roti gandum).
4. Consider lifestyle:
    - Breakfast typically around 07.00–08.00.
    - Lunch around 12.00–13.00.
    - Dinner around 18.30–20.00.
    - Optional snacks in mid-morning and mid-afternoon.
5. Ensure the total daily calories match kebutuhan_kalori and distribute evenly.
6. Use Indonesian language for all menu names.";

const FOOD_SCANNER_SYSTEM: &str = "\
You are a nutrition analysis AI. The input is an image of food. Your task is to:
    1. Identify the name of the dish (Indonesian food names if possible).
    2. Provide a photo reference (the same input image).
    3. Estimate the composition of the food: list each main food item with approximate grams.
    4. Estimate macronutrients (carbohydrates, protein, fat, fiber).
    5. Detect micronutrients: list presence/absence of vitamins and minerals.
    6. Estimate total calories.
    7. Assign a Food Grade (A/B/C/D/E) based on balance and healthiness.
    8. Add a short explanation in \"Keterangan\".";

const LABEL_SCANNER_SYSTEM: &str = "\
You are a nutrition analysis AI. The input is an image of a food label. Your task is to:
    1. Identify the food name (Indonesian food names if possible).
    2. Provide a photo reference (the same input image).
    3. Estimate the standard portion size in grams.
    4. Provide macronutrient content (carbohydrates, protein, fat, fiber).
    5. Detect micronutrients: list presence/absence of vitamins and minerals.
    6. Estimate total calories per portion.
    7. Assign a Nutrition Grade (A/B/C/D/E) based on healthiness.
    8. Add a short explanation in \"Keterangan\".";

const SCANNER_RULES: &str = "\
Rules:
0. Respond only with the JSON output, no extra text.
1. Respond in Indonesian language.";

const NUTRITION_ADVISOR_SYSTEM: &str = "\
You are a professional nutrition advisor AI.
Based on the following user profile, nutrition plan, daily meal plan, and progress data, generate a JSON response with the keys:
- \"insight\": short analysis about the user's current nutrition and health progress.
- \"recommendation\": practical advice for improving their nutrition habits.
- \"reminder\": gentle reminder for daily healthy practices (hydration, balance, portion control, etc.).
- \"alert\": warning if there are any risky consumption patterns (e.g., excess sugar, sodium, unhealthy fats).

Make the response concise, personalized, and actionable.
Ensure the output is ONLY in valid JSON format.";

const NUTRIBOT_SYSTEM: &str = "\
You are NutriBot, a professional AI nutrition advisor for this user.
You have access to their profile, nutrition plan, daily meal plan, and progress data.
Use this information to provide supportive, personalized, and easy-to-understand nutrition guidance in a conversational way.";

fn render(data: &JsonObject) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
}

fn render_value(value: &Value) -> String {
    format!("{:#}", value)
}

fn compose(system: &str, input: &str, output: &str, rules: &str) -> String {
    format!("{system}\n\n{input}\n\n{output}\n\n{rules}")
}

pub fn personal_healthy_eating_plan_prompt(user_data: &JsonObject) -> String {
    compose(
        PERSONAL_PLAN_SYSTEM,
        &format!("Input User Data:\n{}", render(user_data)),
        &format!(
            "Output Personal Healthy Eating Plan:\n{}",
            render_value(&personal_plan_skeleton())
        ),
        PERSONAL_PLAN_RULES,
    )
}

pub fn meal_plan_per_day_prompt(user_data: &JsonObject, personal_plan: &JsonObject) -> String {
    compose(
        MEAL_PLAN_SYSTEM,
        &format!(
            "Input User Data:\n{}\n\nInput Personal Healthy Eating Plan:\n{}",
            render(user_data),
            render(personal_plan)
        ),
        &format!(
            "Output Meal Plan Per Day:\n{}",
            render_value(&meal_plan_skeleton())
        ),
        MEAL_PLAN_RULES,
    )
}

pub fn food_scanner_prompt() -> String {
    compose(
        FOOD_SCANNER_SYSTEM,
        "Scan the following image for food items: (image_uploaded)",
        &format!(
            "Output Meal Scanner Result:\n{}",
            render_value(&food_scan_skeleton())
        ),
        SCANNER_RULES,
    )
}

pub fn nutrition_label_scanner_prompt() -> String {
    compose(
        LABEL_SCANNER_SYSTEM,
        "Scan the following image for food labels: (image_uploaded)",
        &format!(
            "Output Ingredient Scanner Result:\n{}",
            render_value(&food_scan_skeleton())
        ),
        SCANNER_RULES,
    )
}

fn context_input(context: &NutritionContext) -> String {
    format!(
        "Input User Data:\n{}\n\nInput Personal Healthy Eating Plan:\n{}\n\nInput Meal Plan Per Day:\n{}\n\nInput User Progress Per Day:\n{}",
        render(&context.user_data),
        render(&context.personal_plan),
        render(&context.meal_plan),
        render(&context.user_progress)
    )
}

pub fn nutrition_advisor_prompt(context: &NutritionContext) -> String {
    compose(
        NUTRITION_ADVISOR_SYSTEM,
        &context_input(context),
        &format!(
            "Output Nutrition Advisor:\n{}",
            render_value(&nutrition_advisor_skeleton())
        ),
        SCANNER_RULES,
    )
}

/// System turn for NutriBot conversations. Unlike the other templates it
/// carries no JSON skeleton: NutriBot answers in prose.
pub fn nutribot_system_prompt(context: &NutritionContext) -> String {
    format!(
        "{NUTRIBOT_SYSTEM}\n\n### User Data:\n{}\n\n### Personal Nutrition Plan:\n{}\n\n### Daily Meal Plan:\n{}\n\n### User Progress:\n{}",
        render(&context.user_data),
        render(&context.personal_plan),
        render(&context.meal_plan),
        render(&context.user_progress)
    )
}
