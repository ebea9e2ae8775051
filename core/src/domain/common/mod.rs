pub mod entities;
pub mod services;

pub const DEFAULT_ARK_BASE_URL: &str = "https://ark.ap-southeast.bytepluses.com/api/v3";
pub const DEFAULT_TEXT_MODEL: &str = "deepseek-r1-250528";
pub const DEFAULT_IMAGE_MODEL: &str = "seed-1-6-250615";

#[derive(Clone, Debug)]
pub struct EatitudeConfig {
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub api_key: String,
    pub base_url: String,
    /// Model used for text-only prompts and NutriBot chat.
    pub text_model: String,
    /// Vision-capable model used when an image is attached.
    pub image_model: String,
    pub timeout_secs: u64,
}

impl LLMConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_ARK_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            timeout_secs: 300,
        }
    }
}
