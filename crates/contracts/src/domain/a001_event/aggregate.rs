use crate::domain::a002_image::ImageReference;
use crate::domain::common::ApiError;
use serde::{Deserialize, Serialize};

/// Body of `POST /events/create`.
///
/// The image reference is flattened so the payload reads
/// `{ title, description, image_link, image_hash }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    #[serde(flatten)]
    pub image: ImageReference,
}

/// Body returned by `POST /events/create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEventResponse {
    pub message: String,
}

/// Only a 200 with a `message` counts as a created event.
pub fn parse_create_response(status: u16, body: &str) -> Result<CreateEventResponse, ApiError> {
    ApiError::check_status(status)?;
    ApiError::decode(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_flattens_image_reference() {
        let req = CreateEventRequest {
            title: "Festa".into(),
            description: "Aniversário".into(),
            image: ImageReference {
                image_link: "https://i.imgur.com/x.png".into(),
                image_hash: "abc123".into(),
            },
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "title": "Festa",
                "description": "Aniversário",
                "image_link": "https://i.imgur.com/x.png",
                "image_hash": "abc123"
            })
        );
    }

    #[test]
    fn test_parse_create_response() {
        let resp = parse_create_response(200, r#"{"message":"Evento criado!"}"#).unwrap();
        assert_eq!(resp.message, "Evento criado!");
        assert_eq!(
            parse_create_response(400, r#"{"message":"x"}"#),
            Err(ApiError::Status(400))
        );
        assert!(matches!(
            parse_create_response(200, "{}"),
            Err(ApiError::Malformed(_))
        ));
    }
}
