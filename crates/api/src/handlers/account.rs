use axum::extract::{OriginalUri, Path, State};
use std::sync::Arc;
use uuid::Uuid;

use pharmsched_core::{errors::SchedError, policy::Action};

use crate::{
    ApiState,
    handlers::PERSON_LIST,
    middleware::{
        auth::{Actor, gate},
        error_handling::AppError,
    },
    response::ActionOutcome,
};

/// Deletes an account. The linked roster entry survives with its account
/// link severed; the roster is the historical record.
#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<Arc<ApiState>>,
    OriginalUri(uri): OriginalUri,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<ActionOutcome, AppError> {
    gate(&actor, Action::UserDelete, uri.path())?;

    pharmsched_db::repositories::user::delete_user(&state.db_pool, id)
        .await
        .map_err(SchedError::Database)?;

    Ok(ActionOutcome::Redirect(PERSON_LIST.to_string()))
}
