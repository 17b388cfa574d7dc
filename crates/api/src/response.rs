use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use pharmsched_core::models::FormErrors;
use serde_json::json;

/// Builds the plain 302 the browser-facing endpoints answer with.
///
/// Axum's `Redirect` helper only emits 303/307/308; the original service
/// always redirected with 302 FOUND and its clients assert on it.
pub fn found(location: &str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}

/// Terminal result of a mutating workflow.
#[derive(Debug)]
pub enum ActionOutcome {
    /// The action ran (or was silently skipped) and the caller is sent on.
    Redirect(String),
    /// Validation failed: nothing was stored and the caller gets the field
    /// errors with the form's 200, mirroring the original's re-rendered page.
    Invalid(FormErrors),
}

impl IntoResponse for ActionOutcome {
    fn into_response(self) -> Response {
        match self {
            ActionOutcome::Redirect(location) => found(&location),
            ActionOutcome::Invalid(errors) => {
                (StatusCode::OK, Json(json!({ "errors": errors }))).into_response()
            }
        }
    }
}
