//! Error types for the biblioteca server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Request body failed to deserialize (missing or mistyped fields)
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] axum::extract::rejection::JsonRejection),

    /// A foreign id (student or book) does not resolve to an existing row
    #[error("Invalid reference: {0}")]
    Reference(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Service error: {0}")]
    Service(String),
}

/// Stable error wire shape: `{kind, message, details?}`
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, message, details) = match &self {
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Invalid input".to_string(),
                serde_json::to_value(errors).ok(),
            ),
            AppError::MalformedBody(rejection) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                rejection.body_text(),
                None,
            ),
            AppError::Reference(msg) => {
                (StatusCode::BAD_REQUEST, "ReferenceError", msg.clone(), None)
            }
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, "NotFoundError", msg.clone(), None)
            }
            AppError::Conflict(msg) => {
                (StatusCode::CONFLICT, "ConflictError", msg.clone(), None)
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "StoreError",
                    "Database error".to_string(),
                    None,
                )
            }
            AppError::Service(msg) => {
                tracing::error!("Service error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ServiceError",
                    msg.clone(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            kind,
            message,
            details,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_wire_shape() {
        let (status, body) = body_json(AppError::NotFound("loan 42 not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["kind"], "NotFoundError");
        assert_eq!(body["message"], "loan 42 not found");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_reference_maps_to_bad_request() {
        let (status, body) = body_json(AppError::Reference("invalid student id".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "ReferenceError");
    }

    #[tokio::test]
    async fn test_conflict_maps_to_409() {
        let (status, body) = body_json(AppError::Conflict("book is not available".into())).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["kind"], "ConflictError");
    }
}
