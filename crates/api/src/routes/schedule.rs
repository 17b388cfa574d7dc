use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/schedule/all/", get(handlers::schedule::list_schedules))
        .route("/schedule/add/", post(handlers::schedule::add_schedule))
        .route(
            "/schedule/detail/:id/",
            get(handlers::schedule::schedule_detail),
        )
        .route(
            "/schedule/edit/:id/",
            get(handlers::schedule::edit_schedule_form).post(handlers::schedule::edit_schedule),
        )
        .route(
            "/schedule/checkout/:id/",
            get(handlers::schedule::checkout_schedule),
        )
        .route(
            "/schedule/delete/:id/",
            get(handlers::schedule::delete_schedule),
        )
        .route("/schedule/shift/add/", post(handlers::shift::add_shift))
        .route(
            "/schedule/shift/delete/:id/",
            get(handlers::shift::delete_shift),
        )
}
