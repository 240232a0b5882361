use thiserror::Error;

/// Failure of a single backend call.
///
/// Every call is attempted once; the caller decides which user-facing
/// notice (if any) a failure maps to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (fetch rejected, CORS, offline).
    #[error("request failed: {0}")]
    Network(String),

    /// The backend answered with something other than 200.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The body could not be decoded as the expected JSON.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Upload answered 200 but the body carries no `image_link`.
    #[error("upload response has no image link")]
    MissingImageLink,

    /// Delete answered 200 but with a confirmation message we do not accept.
    #[error("unexpected confirmation message: {0:?}")]
    UnexpectedConfirmation(String),
}

impl ApiError {
    /// Status code check shared by every endpoint: only 200 counts as success.
    pub fn check_status(status: u16) -> Result<(), ApiError> {
        if status == 200 {
            Ok(())
        } else {
            Err(ApiError::Status(status))
        }
    }

    /// Decode a JSON body, mapping decoder errors to [`ApiError::Malformed`].
    pub fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))
    }
}
