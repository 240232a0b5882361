use crate::domain::common::ApiError;
use serde::{Deserialize, Serialize};

/// Exact confirmation text the backend sends after deleting an image.
/// Anything else on a 200 is treated as a failed delete.
pub const DELETE_CONFIRMATION_MESSAGE: &str = "Imagem deletada com sucesso!";

// ============================================================================
// Image Reference
// ============================================================================

/// Remote image on the image host, as returned by `POST /image/upload`.
///
/// `image_hash` is the opaque key used by `DELETE /image/{image_hash}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageReference {
    pub image_link: String,
    pub image_hash: String,
}

// ============================================================================
// Wire responses
// ============================================================================

/// Raw body of `POST /image/upload`. Fields are optional on the wire so a
/// 200 without a link can be told apart from a decoding error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadImageResponse {
    #[serde(default)]
    pub image_link: Option<String>,
    #[serde(default)]
    pub image_hash: Option<String>,
}

/// Body of `DELETE /image/{image_hash}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteImageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Turn an upload response into an [`ImageReference`].
///
/// Success requires status 200 and a non-empty `image_link`. A missing hash
/// would leave an image we can never delete, so it is rejected as well.
pub fn parse_upload_response(status: u16, body: &str) -> Result<ImageReference, ApiError> {
    ApiError::check_status(status)?;
    let data: UploadImageResponse = ApiError::decode(body)?;

    let image_link = data
        .image_link
        .filter(|link| !link.is_empty())
        .ok_or(ApiError::MissingImageLink)?;
    let image_hash = data
        .image_hash
        .filter(|hash| !hash.is_empty())
        .ok_or_else(|| ApiError::Malformed("image_hash is missing".into()))?;

    Ok(ImageReference {
        image_link,
        image_hash,
    })
}

/// Check a delete response; returns the confirmation message on success.
pub fn parse_delete_response(status: u16, body: &str) -> Result<String, ApiError> {
    ApiError::check_status(status)?;
    let data: DeleteImageResponse = ApiError::decode(body)?;

    match data.message {
        Some(message) if message == DELETE_CONFIRMATION_MESSAGE => Ok(message),
        Some(other) => Err(ApiError::UnexpectedConfirmation(other)),
        None => Err(ApiError::UnexpectedConfirmation(String::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_success() {
        let body = r#"{"image_link":"https://i.imgur.com/x.png","image_hash":"abc123"}"#;
        let image = parse_upload_response(200, body).unwrap();
        assert_eq!(image.image_link, "https://i.imgur.com/x.png");
        assert_eq!(image.image_hash, "abc123");
    }

    #[test]
    fn test_upload_without_link_is_failure() {
        let body = r#"{"image_hash":"abc123"}"#;
        assert_eq!(
            parse_upload_response(200, body),
            Err(ApiError::MissingImageLink)
        );
        let body = r#"{"image_link":"","image_hash":"abc123"}"#;
        assert_eq!(
            parse_upload_response(200, body),
            Err(ApiError::MissingImageLink)
        );
    }

    #[test]
    fn test_upload_non_200_is_failure() {
        let body = r#"{"image_link":"https://i.imgur.com/x.png","image_hash":"abc123"}"#;
        assert_eq!(parse_upload_response(500, body), Err(ApiError::Status(500)));
    }

    #[test]
    fn test_delete_requires_exact_message() {
        let ok = r#"{"message":"Imagem deletada com sucesso!"}"#;
        assert_eq!(
            parse_delete_response(200, ok).unwrap(),
            DELETE_CONFIRMATION_MESSAGE
        );

        let other = r#"{"message":"ok"}"#;
        assert_eq!(
            parse_delete_response(200, other),
            Err(ApiError::UnexpectedConfirmation("ok".into()))
        );
        assert_eq!(parse_delete_response(404, ok), Err(ApiError::Status(404)));
    }
}
