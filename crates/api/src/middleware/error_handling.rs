//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the PharmSched
//! API. It maps domain-specific errors to HTTP responses: most variants become
//! a status code with a JSON error body, while the authentication-required
//! case becomes the 302 to the login form that browsers expect.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pharmsched_core::errors::SchedError;
use serde_json::json;

use crate::response::found;

/// Application error wrapper that provides HTTP response mapping
///
/// `AppError` wraps domain-specific `SchedError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub SchedError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes. Authentication-required is a
        // redirect rather than an error page: the caller is sent to the login
        // form carrying the path it came from.
        let status = match &self.0 {
            SchedError::LoginRequired { next } => {
                return found(&format!("/accounts/login/?next={}", next));
            }
            SchedError::NotFound(_) => StatusCode::NOT_FOUND,
            SchedError::Validation(_) => StatusCode::BAD_REQUEST,
            SchedError::Authentication(_) => StatusCode::UNAUTHORIZED,
            SchedError::Authorization(_) => StatusCode::FORBIDDEN,
            SchedError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SchedError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from SchedError to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, SchedError>` in handler functions that return `Result<T, AppError>`.
impl From<SchedError> for AppError {
    fn from(err: SchedError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// Repository results carry `eyre::Report`; this wraps them in the
/// `SchedError::Database` variant so handlers can use `?` directly.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(SchedError::Database(err))
    }
}

/// Maps a SchedError to an HTTP response.
pub fn map_error(err: SchedError) -> Response {
    AppError(err).into_response()
}
