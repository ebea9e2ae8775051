use eatitude_core::domain::{
    llm::entities::ChatMessage,
    nutrition::{
        entities::UserProfile,
        value_objects::{JsonObject, MealPlanInput, NutriBotChatInput, NutritionContext},
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Shape-only: any well-typed profile is forwarded to the model.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserDataValidator {
    pub nama: String,

    pub usia: i32,

    pub jenis_kelamin: String,

    /// Weight in kilograms.
    pub berat_badan: f64,

    /// Height in centimetres.
    pub tinggi_badan: f64,

    pub tingkat_aktivitas: String,

    #[serde(default)]
    pub catatan_aktivitas: Option<String>,

    #[schema(example = "07.00")]
    pub waktu_bangun: String,

    #[schema(example = "22.00")]
    pub waktu_tidur: String,

    #[serde(default)]
    pub preferensi_makanan: Option<String>,

    #[serde(default)]
    pub alergi_makanan: Option<String>,

    #[serde(default)]
    pub kondisi_kesehatan: Option<String>,

    pub tujuan: String,
}

impl From<UserDataValidator> for UserProfile {
    fn from(payload: UserDataValidator) -> Self {
        UserProfile {
            nama: payload.nama,
            usia: payload.usia,
            jenis_kelamin: payload.jenis_kelamin,
            berat_badan: payload.berat_badan,
            tinggi_badan: payload.tinggi_badan,
            tingkat_aktivitas: payload.tingkat_aktivitas,
            catatan_aktivitas: payload.catatan_aktivitas,
            waktu_bangun: payload.waktu_bangun,
            waktu_tidur: payload.waktu_tidur,
            preferensi_makanan: payload.preferensi_makanan,
            alergi_makanan: payload.alergi_makanan,
            kondisi_kesehatan: payload.kondisi_kesehatan,
            tujuan: payload.tujuan,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct MealPlanRequest {
    #[schema(value_type = Object)]
    pub user_data: JsonObject,

    #[schema(value_type = Object)]
    pub personal_plan: JsonObject,
}

impl From<MealPlanRequest> for MealPlanInput {
    fn from(payload: MealPlanRequest) -> Self {
        MealPlanInput {
            user_data: payload.user_data,
            personal_plan: payload.personal_plan,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NutritionAdvisorRequest {
    #[schema(value_type = Object)]
    pub user_data: JsonObject,

    #[schema(value_type = Object)]
    pub personal_plan: JsonObject,

    #[schema(value_type = Object)]
    pub meal_plan: JsonObject,

    #[schema(value_type = Object)]
    pub user_progress: JsonObject,
}

impl From<NutritionAdvisorRequest> for NutritionContext {
    fn from(payload: NutritionAdvisorRequest) -> Self {
        NutritionContext {
            user_data: payload.user_data,
            personal_plan: payload.personal_plan,
            meal_plan: payload.meal_plan,
            user_progress: payload.user_progress,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NutriBotChatRequest {
    #[schema(value_type = Object)]
    pub user_data: JsonObject,

    #[schema(value_type = Object)]
    pub personal_plan: JsonObject,

    #[schema(value_type = Object)]
    pub meal_plan: JsonObject,

    #[schema(value_type = Object)]
    #[serde(default)]
    pub user_progress: JsonObject,

    /// Conversation so far, oldest first. Only `user` and `assistant` roles.
    #[validate(length(min = 1, message = "messages must contain at least one turn"))]
    pub messages: Vec<ChatMessage>,
}

impl From<NutriBotChatRequest> for NutriBotChatInput {
    fn from(payload: NutriBotChatRequest) -> Self {
        NutriBotChatInput {
            context: NutritionContext {
                user_data: payload.user_data,
                personal_plan: payload.personal_plan,
                meal_plan: payload.meal_plan,
                user_progress: payload.user_progress,
            },
            messages: payload.messages,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NutriBotChatResponse {
    pub reply: String,
}

/// Image sent as base64 inside a JSON body, for clients that cannot post
/// multipart forms reliably.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Base64ImageRequest {
    /// Bare base64 or a `data:image/...;base64,` URL.
    #[validate(length(min = 1, message = "file is required"))]
    pub file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ImageUploadForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CalculateImtRequest {
    #[validate(range(exclusive_min = 0.0, message = "berat_badan must be positive"))]
    pub berat_badan: f64,

    #[validate(range(exclusive_min = 0.0, message = "tinggi_badan must be positive"))]
    pub tinggi_badan: f64,
}
