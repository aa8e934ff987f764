use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Submission failed")]
    SubmissionFailed,
    #[error("A submission is already in progress")]
    Busy,
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => {
                tracing::debug!(message = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, msg)
            }
            Self::SubmissionFailed => {
                tracing::debug!("Submission failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Could not send your message. Please try again.".to_string(),
                )
            }
            Self::Busy => {
                tracing::debug!("Submission rejected while busy");
                (StatusCode::CONFLICT, "A submission is already in progress".to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
