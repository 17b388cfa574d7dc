use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use pharmsched_core::{errors::SchedError, models::account::LoginRequest};

use crate::{
    ApiState,
    handlers::SCHEDULE_LIST,
    middleware::{
        auth::{self, Actor},
        error_handling::AppError,
    },
    response::found,
};

#[derive(Debug, Default, Deserialize)]
pub struct LoginPageQuery {
    pub next: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginPageResponse {
    pub next: Option<String>,
}

/// Landing page. Anonymous visitors are sent to the login form with the
/// return path they came for.
#[axum::debug_handler(state = Arc<ApiState>)]
pub async fn home(actor: Actor) -> Response {
    match actor {
        Actor::Anonymous => found("/schedule/login/?next=/"),
        Actor::User(user) => Json(json!({ "username": user.username })).into_response(),
    }
}

/// Login form. Rendering is left to the client; the handler echoes the
/// return path so the form can carry it through the POST.
#[axum::debug_handler]
pub async fn login_page(Query(query): Query<LoginPageQuery>) -> Json<LoginPageResponse> {
    Json(LoginPageResponse { next: query.next })
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, AppError> {
    let user = pharmsched_db::repositories::user::get_user_by_username(
        &state.db_pool,
        &payload.username,
    )
    .await
    .map_err(SchedError::Database)?
    .ok_or_else(|| {
        AppError(SchedError::Authentication(
            "Invalid username or password".to_string(),
        ))
    })?;

    let valid = auth::verify_password(&payload.password, &user.password_hash)?;
    if !valid {
        return Err(AppError(SchedError::Authentication(
            "Invalid username or password".to_string(),
        )));
    }

    let token = auth::mint_session_token(&state.session_secret, user.id)?;
    let location = payload
        .next
        .unwrap_or_else(|| SCHEDULE_LIST.to_string());

    tracing::info!("User {} logged in", user.username);

    Ok((
        StatusCode::FOUND,
        [
            (header::LOCATION, location),
            (header::SET_COOKIE, auth::session_cookie(&token)),
        ],
    )
        .into_response())
}

#[axum::debug_handler]
pub async fn logout() -> Response {
    (
        StatusCode::FOUND,
        [
            (header::LOCATION, "/schedule/login/".to_string()),
            (header::SET_COOKIE, auth::clear_session_cookie()),
        ],
    )
        .into_response()
}
