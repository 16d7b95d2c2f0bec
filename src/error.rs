use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

use crate::types::job::JobId;

#[derive(Debug, ThisError)]
pub enum SeekrError {
    #[error("Email already registered.")]
    EmailTaken,

    #[error("Incorrect email or password.")]
    InvalidCredentials,

    #[error("Email not registered")]
    EmailNotRegistered,

    #[error("Recruiter not registered")]
    RecruiterNotRegistered,

    #[error("User not found.")]
    UserNotFound,

    #[error("Job not found.")]
    JobNotFound(JobId),

    #[error("{0}")]
    Forbidden(&'static str),

    #[error("Action must be 'like' or 'skip'.")]
    InvalidSwipeAction(String),

    /// Request body or query string failed extraction.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl SeekrError {
    pub fn status(&self) -> StatusCode {
        match self {
            SeekrError::EmailTaken | SeekrError::InvalidSwipeAction(_) => StatusCode::BAD_REQUEST,
            SeekrError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            SeekrError::EmailNotRegistered
            | SeekrError::RecruiterNotRegistered
            | SeekrError::UserNotFound
            | SeekrError::JobNotFound(_) => StatusCode::NOT_FOUND,
            SeekrError::Forbidden(_) => StatusCode::FORBIDDEN,
            SeekrError::Rejected { status, .. } => *status,
            SeekrError::DatabaseError(_) | SeekrError::JsonError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn code(&self) -> &'static str {
        match self {
            SeekrError::EmailTaken => "EMAIL_TAKEN",
            SeekrError::InvalidCredentials => "UNAUTHORIZED",
            SeekrError::EmailNotRegistered
            | SeekrError::RecruiterNotRegistered
            | SeekrError::UserNotFound
            | SeekrError::JobNotFound(_) => "NOT_FOUND",
            SeekrError::Forbidden(_) => "FORBIDDEN",
            SeekrError::InvalidSwipeAction(_) => "BAD_REQUEST",
            SeekrError::Rejected { .. } => "INVALID_REQUEST",
            SeekrError::DatabaseError(_) | SeekrError::JsonError(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for SeekrError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match &self {
            SeekrError::DatabaseError(_) | SeekrError::JsonError(_) => {
                tracing::error!(error = %self, "storage failure");
                "An internal server error occurred.".to_string()
            }
            other => other.to_string(),
        };
        let body = ApiErrorBody {
            code: self.code().to_string(),
            message,
        };
        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
