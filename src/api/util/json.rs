use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::api::dto::MessageResponse;
use crate::errors::{AppError, AppResult};

/// Map a service result into a JSON body, wrapping the value with `wrap`.
pub fn to_json<T, U, F>(result: AppResult<T>, wrap: F) -> Result<Json<U>, AppError>
where
    U: Serialize,
    F: FnOnce(T) -> U,
{
    result.map(|value| Json(wrap(value)))
}

/// Map a unit service result into `{"message": ...}`.
pub fn to_message(result: AppResult<()>, message: &str) -> Result<Json<MessageResponse>, AppError> {
    to_json(result, |_| MessageResponse::new(message))
}

/// 201 with no body, for creates that return nothing.
pub fn created_empty<T>(result: AppResult<T>) -> Result<StatusCode, AppError> {
    result.map(|_| StatusCode::CREATED)
}
