use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    llm::{
        entities::{ChatMessage, ChatRole, ImageData},
        ports::LLMClient,
    },
};

/// BytePlus ModelArk chat-completion client. Text prompts go to
/// `text_model`, prompts with an attached image go to `image_model`.
#[derive(Debug, Clone)]
pub struct ArkLLMClient {
    api_key: String,
    base_url: String,
    text_model: String,
    image_model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<RequestMessage>,
}

#[derive(Debug, Serialize)]
struct RequestMessage {
    role: ChatRole,
    content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
    detail: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl From<ChatMessage> for RequestMessage {
    fn from(message: ChatMessage) -> Self {
        Self {
            role: message.role,
            content: MessageContent::Text(message.content),
        }
    }
}

fn text_turn(prompt: String) -> RequestMessage {
    RequestMessage {
        role: ChatRole::User,
        content: MessageContent::Parts(vec![ContentPart::Text { text: prompt }]),
    }
}

fn image_turn(prompt: String, image: &ImageData) -> RequestMessage {
    RequestMessage {
        role: ChatRole::User,
        content: MessageContent::Parts(vec![
            ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: image.to_data_url(),
                    detail: "high",
                },
            },
            ContentPart::Text { text: prompt },
        ]),
    }
}

impl ArkLLMClient {
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CoreError::InvalidConfiguration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
            client,
        })
    }

    async fn call_chat_completion(
        &self,
        request: ChatCompletionRequest<'_>,
    ) -> Result<String, CoreError> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(model = request.model, turns = request.messages.len(), "calling Ark chat completion");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Ark API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Ark API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Ark response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl LLMClient for ArkLLMClient {
    async fn generate_text(&self, prompt: String) -> Result<String, CoreError> {
        let request = ChatCompletionRequest {
            model: &self.text_model,
            messages: vec![text_turn(prompt)],
        };

        self.call_chat_completion(request).await
    }

    async fn generate_with_image(
        &self,
        prompt: String,
        image: ImageData,
    ) -> Result<String, CoreError> {
        let request = ChatCompletionRequest {
            model: &self.image_model,
            messages: vec![image_turn(prompt, &image)],
        };

        self.call_chat_completion(request).await
    }

    async fn chat(&self, messages: Vec<ChatMessage>) -> Result<String, CoreError> {
        let request = ChatCompletionRequest {
            model: &self.text_model,
            messages: messages.into_iter().map(RequestMessage::from).collect(),
        };

        self.call_chat_completion(request).await
    }
}
