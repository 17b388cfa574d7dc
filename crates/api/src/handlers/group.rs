use axum::{
    Json,
    extract::{OriginalUri, State},
};
use std::sync::Arc;

use pharmsched_core::{
    errors::SchedError,
    models::account::{CreateGroupRequest, GroupResponse},
    policy::Action,
};

use crate::{
    ApiState,
    handlers::GROUP_LIST,
    middleware::{
        auth::{Actor, gate},
        error_handling::AppError,
    },
    response::ActionOutcome,
};

#[axum::debug_handler]
pub async fn list_groups(
    State(state): State<Arc<ApiState>>,
    OriginalUri(uri): OriginalUri,
    actor: Actor,
) -> Result<Json<Vec<GroupResponse>>, AppError> {
    gate(&actor, Action::GroupList, uri.path())?;

    let groups = pharmsched_db::repositories::group::list_groups(&state.db_pool)
        .await
        .map_err(SchedError::Database)?;

    let response = groups
        .into_iter()
        .map(|g| GroupResponse {
            id: g.id,
            name: g.name,
            member_count: g.member_count,
        })
        .collect();

    Ok(Json(response))
}

/// Creates a group when the submitted name is a usable string.
///
/// Anything else (missing, boolean, number) creates nothing but still
/// redirects as if it had. Observed contract of the original; flagged in
/// DESIGN.md as likely unintentional.
#[axum::debug_handler]
pub async fn add_group(
    State(state): State<Arc<ApiState>>,
    OriginalUri(uri): OriginalUri,
    actor: Actor,
    payload: Option<Json<CreateGroupRequest>>,
) -> Result<ActionOutcome, AppError> {
    gate(&actor, Action::GroupAdd, uri.path())?;

    let request = payload.map(|Json(p)| p).unwrap_or_default();
    match request.group_name() {
        Some(name) => {
            pharmsched_db::repositories::group::create_group(&state.db_pool, &name)
                .await
                .map_err(SchedError::Database)?;
        }
        None => {
            tracing::debug!("Discarding group submission without a usable name");
        }
    }

    Ok(ActionOutcome::Redirect(GROUP_LIST.to_string()))
}
