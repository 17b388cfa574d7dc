use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/schedule/group/all/", get(handlers::group::list_groups))
        .route("/schedule/group/add/", post(handlers::group::add_group))
}
