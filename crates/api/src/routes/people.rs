use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        // No trailing slash on the listing; the original never had one.
        .route("/schedule/person/all", get(handlers::person::list_persons))
        .route("/schedule/person/add/", post(handlers::person::add_person))
        .route(
            "/schedule/user/delete/:id/",
            get(handlers::account::delete_user),
        )
}
