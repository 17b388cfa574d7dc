use axum::{
    Json,
    extract::{OriginalUri, Path, State},
};
use std::sync::Arc;
use uuid::Uuid;

use pharmsched_core::{
    errors::SchedError,
    models::shift::{CreateShiftRequest, ShiftResponse},
    policy::Action,
};
use pharmsched_db::models::DbShift;

use crate::{
    ApiState,
    handlers::SCHEDULE_LIST,
    middleware::{
        auth::{Actor, gate},
        error_handling::AppError,
    },
    response::ActionOutcome,
};

pub(crate) fn shift_response(shift: DbShift) -> ShiftResponse {
    ShiftResponse {
        id: shift.id,
        name: shift.name,
        capacity: shift.capacity,
        shift_type: shift.shift_type,
    }
}

/// Creates a shift under an existing schedule.
///
/// An invalid submission, including a schedule id that is not in the store,
/// creates nothing and still answers with the redirect. The original behaved
/// this way and its callers assert on the 302.
#[axum::debug_handler]
pub async fn add_shift(
    State(state): State<Arc<ApiState>>,
    OriginalUri(uri): OriginalUri,
    actor: Actor,
    payload: Option<Json<CreateShiftRequest>>,
) -> Result<ActionOutcome, AppError> {
    gate(&actor, Action::ShiftAdd, uri.path())?;

    let request = payload.map(|Json(p)| p).unwrap_or_default();
    let new_shift = match request.validate() {
        Ok(new_shift) => new_shift,
        Err(errors) => {
            tracing::debug!("Discarding invalid shift submission: {:?}", errors);
            return Ok(ActionOutcome::Redirect(SCHEDULE_LIST.to_string()));
        }
    };

    let exists =
        pharmsched_db::repositories::schedule::schedule_exists(&state.db_pool, new_shift.schedule_id)
            .await
            .map_err(SchedError::Database)?;
    if !exists {
        tracing::debug!(
            "Discarding shift for unknown schedule {}",
            new_shift.schedule_id
        );
        return Ok(ActionOutcome::Redirect(SCHEDULE_LIST.to_string()));
    }

    match pharmsched_db::repositories::shift::create_shift(
        &state.db_pool,
        new_shift.schedule_id,
        &new_shift.name,
        new_shift.capacity,
        new_shift.shift_type.code(),
    )
    .await
    {
        Ok(_) => Ok(ActionOutcome::Redirect(SCHEDULE_LIST.to_string())),
        // The owning schedule can vanish between the check and the insert.
        Err(e) if pharmsched_db::is_foreign_key_violation(&e) => {
            tracing::debug!("Discarding shift for concurrently deleted schedule");
            Ok(ActionOutcome::Redirect(SCHEDULE_LIST.to_string()))
        }
        Err(e) => Err(AppError(SchedError::Database(e))),
    }
}

#[axum::debug_handler]
pub async fn delete_shift(
    State(state): State<Arc<ApiState>>,
    OriginalUri(uri): OriginalUri,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<ActionOutcome, AppError> {
    gate(&actor, Action::ShiftDelete, uri.path())?;

    pharmsched_db::repositories::shift::delete_shift(&state.db_pool, id)
        .await
        .map_err(SchedError::Database)?;

    Ok(ActionOutcome::Redirect(SCHEDULE_LIST.to_string()))
}
