use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("External service error: HTTP {status} - {message}")]
    ExternalServiceError { status: u16, message: String },

    #[error("Category {category_id} cannot be moved under {parent_id:?}: circular reference")]
    CircularReference {
        category_id: i64,
        parent_id: Option<i64>,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Map a non-success backend reply to an error.
    ///
    /// `message` is the backend's own `message` field when the body carried one.
    pub fn from_status(status: StatusCode, message: Option<String>) -> Self {
        let message = message.unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected response")
                .to_string()
        });

        match status {
            StatusCode::UNAUTHORIZED => AppError::Unauthorized(message),
            StatusCode::NOT_FOUND => AppError::NotFound(message),
            StatusCode::BAD_REQUEST => AppError::BadRequest(message),
            StatusCode::UNPROCESSABLE_ENTITY => AppError::Validation(message),
            StatusCode::CONFLICT => AppError::Conflict(message),
            _ => AppError::ExternalServiceError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Text shown to the user in a transient notification.
    ///
    /// Backend messages are passed through; transport and decode failures
    /// fall back to `fallback`, which names the action that failed.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::NotFound(msg)
            | AppError::Validation(msg)
            | AppError::BadRequest(msg)
            | AppError::Conflict(msg)
            | AppError::ExternalServiceError { message: msg, .. } => msg.clone(),
            AppError::Unauthorized(_) => "Session expired, please sign in again".to_string(),
            AppError::CircularReference { .. } => {
                "A category cannot be moved under one of its own descendants".to_string()
            }
            AppError::Http(_) | AppError::Decode(_) | AppError::Internal(_) => {
                fallback.to_string()
            }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Unauthorized(_))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
