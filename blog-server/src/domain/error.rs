use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),
    #[error("post not found: {0}")]
    PostNotFound(Uuid),
    #[error("internal error: {0}")]
    Internal(String),
    #[error("store write failed: {0}")]
    MutationFailed(String),
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        match self {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::PostNotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Internal(_) | DomainError::MutationFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    // Read-path store failures answer with a `message` body, write-path
    // failures with an `error` body. Both shapes are part of the documented
    // contract, so they stay distinct here.
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            DomainError::Validation(message) => json!({ "error": message }),
            DomainError::PostNotFound(id) => {
                json!({ "message": "Post not found", "resource": id })
            }
            DomainError::Internal(_) => json!({ "message": "Internal server error" }),
            DomainError::MutationFailed(_) => json!({ "error": "something went terribly wrong" }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
