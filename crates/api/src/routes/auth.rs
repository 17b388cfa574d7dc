use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    // The original exposed two login URLs: the landing page pointed at
    // /schedule/login/ while every other protected path bounced to
    // /accounts/login/. Both serve the same handlers.
    Router::new()
        .route("/", get(handlers::auth::home))
        .route(
            "/schedule/login/",
            get(handlers::auth::login_page).post(handlers::auth::login),
        )
        .route(
            "/accounts/login/",
            get(handlers::auth::login_page).post(handlers::auth::login),
        )
        .route("/schedule/logout/", get(handlers::auth::logout))
}
