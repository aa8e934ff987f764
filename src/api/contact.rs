use crate::api::AppState;
use crate::api::dto::contact::{ContactRequest, ContactResponse};
use crate::domain::contact::NewSubmission;
use crate::error::{AppError, Result};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

/// Accepts one contact-form submission and appends it to the store.
///
/// # Errors
/// Returns `AppError::BadRequest` if a field is empty or oversized.
/// Returns `AppError::Busy` if another submission is in flight.
/// Returns `AppError::SubmissionFailed` if the store write fails; the
/// submitted values are never partially recorded.
pub async fn submit_message(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<impl IntoResponse> {
    let submission = NewSubmission::parse(request.name, request.email, request.message)
        .map_err(AppError::BadRequest)?;

    state.submission_service.submit(submission).await?;

    Ok((StatusCode::CREATED, Json(ContactResponse::sent())))
}
