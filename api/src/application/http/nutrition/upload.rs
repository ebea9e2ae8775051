use axum::extract::{Multipart, multipart::MultipartError};
use axum::http::StatusCode;
use eatitude_core::domain::llm::entities::ImageData;
use tracing::{error, warn};

use crate::application::http::server::api_entities::api_error::ApiError;

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

const IMAGE_FIELD: &str = "file";

/// `Ok(None)` means the part carries no usable type and the default applies.
fn image_mime_type(content_type: Option<&str>) -> Result<Option<String>, ApiError> {
    match content_type {
        None | Some("application/octet-stream") => Ok(None),
        Some(mime) if mime.starts_with("image/") => Ok(Some(mime.to_string())),
        Some(mime) => Err(ApiError::BadRequest(format!(
            "Unsupported content type {}, please upload an image",
            mime
        ))),
    }
}

fn ensure_image_size(image: &ImageData) -> Result<(), ApiError> {
    if image.bytes.is_empty() {
        warn!("Empty image upload attempted");
        return Err(ApiError::BadRequest("File cannot be empty".to_string()));
    }

    if image.bytes.len() > MAX_IMAGE_SIZE {
        return Err(ApiError::PayloadTooLarge(format!(
            "Image too large. Max size is {} bytes",
            MAX_IMAGE_SIZE
        )));
    }

    Ok(())
}

/// Length-limit failures surface as 413, everything else as a malformed form.
fn multipart_error(action: &str, e: MultipartError) -> ApiError {
    error!("{}: {}", action, e);
    let message = format!("{}: {}", action, e);

    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(message)
    } else {
        ApiError::BadRequest(message)
    }
}

/// Reads the `file` part of a multipart form into memory.
pub async fn read_image_upload(mut multipart: Multipart) -> Result<ImageData, ApiError> {
    let mut image: Option<ImageData> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read multipart field", e))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let mime_type = image_mime_type(field.content_type())?;
        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error("Failed to read file", e))?;

        image = Some(ImageData::new(data.to_vec(), mime_type));
    }

    let image = image.ok_or_else(|| {
        ApiError::BadRequest("Missing 'file' field in multipart form".to_string())
    })?;
    ensure_image_size(&image)?;

    Ok(image)
}

pub fn decode_base64_image(encoded: &str) -> Result<ImageData, ApiError> {
    let image = ImageData::from_base64(encoded).map_err(ApiError::from)?;
    image_mime_type(Some(&image.mime_type))?;
    ensure_image_size(&image)?;

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type_rules() {
        assert_eq!(image_mime_type(None), Ok(None));
        assert_eq!(image_mime_type(Some("application/octet-stream")), Ok(None));
        assert_eq!(
            image_mime_type(Some("image/png")),
            Ok(Some("image/png".to_string()))
        );
        assert!(matches!(
            image_mime_type(Some("text/plain")),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn test_decode_base64_image_rejects_non_image_data_url() {
        let err = decode_base64_image("data:text/plain;base64,AQID").unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_oversized_image_is_rejected() {
        let image = ImageData::new(vec![0; MAX_IMAGE_SIZE + 1], None);
        assert!(matches!(
            ensure_image_size(&image),
            Err(ApiError::PayloadTooLarge(_))
        ));
    }
}
