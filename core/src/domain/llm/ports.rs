use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    llm::entities::{ChatMessage, ImageData},
};

/// LLM Client trait for calling hosted chat-completion models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends `prompt` as a single user turn to the text model.
    fn generate_text(&self, prompt: String)
    -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Sends `image` followed by `prompt` as a single user turn to the
    /// vision model.
    fn generate_with_image(
        &self,
        prompt: String,
        image: ImageData,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn chat(
        &self,
        messages: Vec<ChatMessage>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
