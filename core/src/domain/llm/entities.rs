use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

pub const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Raw image bytes plus the mime type reported by the uploader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl ImageData {
    pub fn new(bytes: Vec<u8>, mime_type: Option<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.unwrap_or_else(|| DEFAULT_IMAGE_MIME_TYPE.to_string()),
        }
    }

    /// Decodes a base64 payload. Accepts either bare base64 or a
    /// `data:<mime>;base64,<payload>` URL, in which case the mime type is
    /// taken from the URL.
    pub fn from_base64(encoded: &str) -> Result<Self, CoreError> {
        let encoded = encoded.trim();

        let (mime_type, payload) = match encoded
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(";base64,"))
        {
            Some((mime, payload)) if !mime.is_empty() => (Some(mime.to_string()), payload),
            Some((_, payload)) => (None, payload),
            None => (None, encoded),
        };

        // Android's Base64.DEFAULT wraps lines.
        let payload: String = payload
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();

        let bytes = general_purpose::STANDARD
            .decode(&payload)
            .map_err(|e| CoreError::Invalid(format!("image is not valid base64: {}", e)))?;

        if bytes.is_empty() {
            return Err(CoreError::Invalid("image cannot be empty".to_string()));
        }

        Ok(Self::new(bytes, mime_type))
    }

    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.bytes)
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.to_base64())
    }
}
